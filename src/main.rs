#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

mod board;

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use crate::board::{ButtonInput, MatrixDisplay, PicoTimebase, RamFlagStore, SoftRtc, WordClock};
    use max7219::MAX7219;
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::RateExtU32,
        sio::Sio,
        spi::Spi,
        timer::Timer,
        watchdog::Watchdog,
    };
    use word_clock::{ClickClassifier, ClickTiming, Controller, ControllerConfig, TimeOfDay};

    const XTAL_FREQ_HZ: u32 = 12_000_000;
    const SPI_FREQ_HZ: u32 = 2_000_000;
    const MATRIX_INTENSITY: u8 = 0x04;
    // Poll at least twice per debounce window.
    const BUTTON_DEBOUNCE_MS: u64 = 20;
    const POLL_INTERVAL_MS: u32 = 10;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        controller: WordClock,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let button = pins.gpio15.into_pull_up_input();

        let mosi = pins.gpio19.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let sck = pins.gpio18.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let miso = pins.gpio16.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            SPI_FREQ_HZ.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let mut matrix = MAX7219::from_spi_cs(1, spi, cs).unwrap();
        matrix.power_on().unwrap();
        matrix.set_intensity(0, MATRIX_INTENSITY).unwrap();
        matrix.clear_display(0).unwrap();

        let controller = Controller::new(
            SoftRtc::new(timer, TimeOfDay::new(12, 0, 0)),
            RamFlagStore::default(),
            MatrixDisplay::new(matrix),
            ButtonInput::new(
                button,
                ClickClassifier::new(ClickTiming::default().with_debounce_ms(BUTTON_DEBOUNCE_MS)),
                timer,
            ),
            PicoTimebase::new(timer),
            ControllerConfig::default().with_poll_interval_ms(POLL_INTERVAL_MS),
        );

        defmt::info!("word clock initialised");

        (Shared {}, Local { controller }, init::Monotonics())
    }

    // The controller owns the display, button and clock for the life of the
    // firmware; it never returns.
    #[idle(local = [controller])]
    fn idle(ctx: idle::Context) -> ! {
        ctx.local.controller.run()
    }
}
