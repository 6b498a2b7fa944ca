//! SysTick: heartbeat and render scheduling
//!
//! The exception body is `TickHandler::on_tick`; the handler itself sits
//! in a critical-section mutex so `main` can install it after bring-up.

use core::cell::RefCell;

use barmatrix_core::TickFlag;
use barmatrix_drivers::TickHandler;
use barmatrix_hal::StatefulPin;
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::exception;
use embassy_stm32::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::board;

pub type HeartbeatPin = StatefulPin<Output<'static>>;

/// Render-state flag shared with the main loop
pub static TICK: TickFlag = TickFlag::new();

static HANDLER: Mutex<CriticalSectionRawMutex, RefCell<Option<TickHandler<'static, HeartbeatPin>>>> =
    Mutex::new(RefCell::new(None));

/// Install the handler and start SysTick at `tick_hz`
pub fn start(handler: TickHandler<'static, HeartbeatPin>, mut syst: SYST, tick_hz: u32) {
    HANDLER.lock(|cell| cell.replace(Some(handler)));

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(board::systick_reload(tick_hz));
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();
}

#[exception]
fn SysTick() {
    HANDLER.lock(|cell| {
        if let Some(handler) = cell.borrow_mut().as_mut() {
            handler.on_tick();
        }
    });
}
