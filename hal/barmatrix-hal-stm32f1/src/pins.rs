//! Board pin assignment (STM32VLDISCOVERY)
//!
//! | Function          | Pin  | Notes                     |
//! |-------------------|------|---------------------------|
//! | Heartbeat LED     | PC8  | blue LED                  |
//! | Status LED        | PC9  | green LED, unused         |
//! | Matrix select     | PA4  | active low, plain GPIO    |
//! | SPI1 SCK          | PA5  |                           |
//! | SPI1 MOSI         | PA7  | MISO (PA6) left floating  |
//! | Analog inputs 0-1 | PB0-PB1 | ADC1 IN8-IN9           |
//! | Analog inputs 2-7 | PC0-PC5 | ADC1 IN10-IN15         |

/// GPIO port of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
}

/// One analog input: its pad and the ADC channel behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogInput {
    pub port: Port,
    pub pin: u8,
    pub adc_channel: u8,
}

impl AnalogInput {
    const fn new(port: Port, pin: u8, adc_channel: u8) -> Self {
        Self {
            port,
            pin,
            adc_channel,
        }
    }
}

/// Analog inputs in scan order; entry `i` feeds channel `i`
pub const ANALOG_INPUTS: [AnalogInput; 8] = [
    AnalogInput::new(Port::B, 0, 8),
    AnalogInput::new(Port::B, 1, 9),
    AnalogInput::new(Port::C, 0, 10),
    AnalogInput::new(Port::C, 1, 11),
    AnalogInput::new(Port::C, 2, 12),
    AnalogInput::new(Port::C, 3, 13),
    AnalogInput::new(Port::C, 4, 14),
    AnalogInput::new(Port::C, 5, 15),
];
