#![no_std]
#![no_main]

use defmt_rtt as _;
use embedded_hal::adc::OneShot;
use panic_probe as _;
use pico_voltclock::input::{normalize_adc, AnalogInput};
use rp_pico::hal::adc::{Adc, AdcPin};
use rp_pico::hal::gpio::{bank0::Gpio26, FunctionSio, Pin, PullNone, SioInput};
use rtic::app;

type PotPin = AdcPin<Pin<Gpio26, FunctionSio<SioInput>, PullNone>>;

/// Potentiometer wiper on ADC0.
pub struct Potentiometer {
    adc: Adc,
    pin: PotPin,
}

impl AnalogInput for Potentiometer {
    fn read_normalized(&mut self) -> f32 {
        // The RP2040 ADC has no conversion error for a valid channel
        let raw: u16 = nb::block!(self.adc.read(&mut self.pin)).unwrap_or(0);
        normalize_adc(raw)
    }
}

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use super::*;
    use defmt::{debug, info, trace};
    use embedded_hal::digital::v2::ToggleableOutputPin;
    use pico_voltclock::{config, Button, ClockState, Controller, Multiplexer, ShiftRegister};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::ExtU32,
        gpio::{
            bank0::{Gpio13, Gpio14, Gpio15, Gpio16, Gpio17, Gpio25},
            PullDown, PullUp, SioOutput,
        },
        sio::Sio,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
    };

    type OutPin<I> = Pin<I, FunctionSio<SioOutput>, PullDown>;
    type ButtonPin<I> = Pin<I, FunctionSio<SioInput>, PullUp>;

    // Data GP15, Clock GP13, Latch GP14, S1 GP16, S3 GP17
    type Panel = Controller<
        OutPin<Gpio15>,
        OutPin<Gpio13>,
        OutPin<Gpio14>,
        ButtonPin<Gpio16>,
        ButtonPin<Gpio17>,
        Potentiometer,
        cortex_m::delay::Delay,
    >;

    // Shared resources (accessed by multiple tasks)
    #[shared]
    struct Shared {
        clock: ClockState,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        alarm: Alarm0,
        led: OutPin<Gpio25>,
        panel: Panel,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            config::EXTERNAL_XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        // First tick one interval from now
        alarm.schedule(config::TICK_INTERVAL_US.micros()).unwrap();
        alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();

        let link = ShiftRegister::new(
            pins.gpio15.into_push_pull_output(),
            pins.gpio13.into_push_pull_output(),
            pins.gpio14.into_push_pull_output(),
        );
        let reset_button = Button::active_low(pins.gpio16.into_pull_up_input());
        let mode_button = Button::active_low(pins.gpio17.into_pull_up_input());

        let pot = Potentiometer {
            adc: Adc::new(pac.ADC, &mut pac.RESETS),
            pin: AdcPin::new(pins.gpio26.into_floating_input()).unwrap(),
        };

        let delay = cortex_m::delay::Delay::new(ctx.core.SYST, clocks.system_clock.freq().to_Hz());

        let panel = Controller::new(
            Multiplexer::new(link),
            reset_button,
            mode_button,
            pot,
            delay,
        );

        info!("voltclock up: data GP15, clock GP13, latch GP14, S1 GP16, S3 GP17, pot GP26");

        (
            Shared {
                clock: ClockState::new(),
            },
            Local { alarm, led, panel },
            init::Monotonics(),
        )
    }

    // Main loop: never returns, only the tick interrupt preempts it
    #[idle(shared = [clock], local = [panel])]
    fn idle(mut ctx: idle::Context) -> ! {
        let panel = ctx.local.panel;
        let mut shown = None;

        loop {
            let report = panel.step(&mut ctx.shared.clock);

            if report.reset {
                let range = panel.voltage();
                info!(
                    "clock reset, {=f32} V .. {=f32} V over {=u32} samples",
                    range.min(),
                    range.max(),
                    range.samples()
                );
            }
            if shown != Some(report.mode) {
                debug!("display mode {}", report.mode);
                shown = Some(report.mode);
            }
        }
    }

    // Hardware Task: Timer Interrupt (1Hz)
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [clock], local = [alarm, led])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        ctx.local.alarm.clear_interrupt();
        ctx.local.alarm.schedule(config::TICK_INTERVAL_US.micros()).ok();

        ctx.local.led.toggle().ok();

        let now = ctx.shared.clock.lock(|c| {
            c.tick();
            c.as_time_value()
        });
        trace!("tick {=u16}", now);
    }
}
