//! Analog sampler abstractions
//!
//! Models a single ADC configured to scan a fixed sequence of inputs.
//! Each [`start`](AnalogSampler::start) converts the next input in the
//! sequence; the caller polls for completion and reads the result.

/// Full-scale value of a 12-bit conversion
pub const ADC_MAX: u16 = 0x0FFF;

/// Scanning ADC, driven flag by flag
pub trait AnalogSampler {
    /// Trigger (or resume) the scan; converts the next input in sequence
    fn start(&mut self);

    /// End-of-conversion flag
    fn is_conversion_complete(&self) -> bool;

    /// Read the last conversion result
    ///
    /// Right-aligned; only the low 12 bits are meaningful.
    fn read(&mut self) -> u16;

    /// Clear the end-of-conversion flag
    fn clear_conversion_complete(&mut self);

    /// Clear the scan-started flag
    fn clear_scan_started(&mut self);

    /// Abandon the scan in progress
    ///
    /// Drops any pending conversion and its flags and rewinds the
    /// sequence, so the next [`start`](AnalogSampler::start) converts the
    /// first input again.
    fn restart_scan(&mut self);
}
