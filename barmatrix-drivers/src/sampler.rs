//! Eight-input analog scan
//!
//! The ADC is set up (outside this crate) to scan the inputs in a fixed
//! sequence. Each start converts the next input; results come back in
//! input order.

use barmatrix_core::NUM_CHANNELS;
use barmatrix_hal::adc::{AnalogSampler, ADC_MAX};

/// Sampling errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Conversion on `channel` did not finish within the poll budget
    Timeout { channel: u8 },
}

/// Analog scan driver
pub struct Sampler<A> {
    adc: A,
}

impl<A: AnalogSampler> Sampler<A> {
    /// Wrap a configured ADC
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Convert every input once, blocking until each finishes
    ///
    /// There is no timeout: an ADC that never signals end of conversion
    /// stalls here.
    pub fn sample_all(&mut self) -> [u16; NUM_CHANNELS] {
        let mut samples = [0u16; NUM_CHANNELS];
        for sample in samples.iter_mut() {
            self.adc.start();
            while !self.adc.is_conversion_complete() {
                core::hint::spin_loop();
            }
            *sample = self.finish_conversion();
        }
        samples
    }

    /// Like [`sample_all`](Self::sample_all), giving up on an input after
    /// `max_polls` unanswered polls
    ///
    /// On timeout the scan is rewound, so the next call starts again at
    /// input 0 with no stale conversion left behind.
    pub fn sample_all_within(&mut self, max_polls: u32) -> Result<[u16; NUM_CHANNELS], SampleError> {
        let mut samples = [0u16; NUM_CHANNELS];
        for (channel, sample) in samples.iter_mut().enumerate() {
            self.adc.start();
            let mut polls = 0;
            while !self.adc.is_conversion_complete() {
                polls += 1;
                if polls >= max_polls {
                    self.adc.restart_scan();
                    return Err(SampleError::Timeout {
                        channel: channel as u8,
                    });
                }
                core::hint::spin_loop();
            }
            *sample = self.finish_conversion();
        }
        Ok(samples)
    }

    /// Read the result and clear the end-of-conversion and start flags
    fn finish_conversion(&mut self) -> u16 {
        let value = self.adc.read() & ADC_MAX;
        self.adc.clear_conversion_complete();
        self.adc.clear_scan_started();
        value
    }

    /// Release the ADC
    pub fn free(self) -> A {
        self.adc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_log, ops, FakeAdc, Op};

    #[test]
    fn test_samples_in_input_order() {
        let log = new_log();
        let mut sampler = Sampler::new(FakeAdc::new(
            &log,
            &[10, 20, 30, 40, 50, 60, 70, 80],
            Some(4),
        ));
        assert_eq!(sampler.sample_all(), [10, 20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_flag_sequence_per_input() {
        let log = new_log();
        let mut sampler = Sampler::new(FakeAdc::new(&log, &[1], Some(1)));
        sampler.sample_all();

        let per_input = [Op::AdcStart, Op::AdcRead, Op::AdcClearEoc, Op::AdcClearStrt];
        let recorded = ops(&log);
        assert_eq!(recorded.len(), per_input.len() * NUM_CHANNELS);
        for chunk in recorded.chunks(per_input.len()) {
            assert_eq!(chunk, per_input);
        }
    }

    #[test]
    fn test_result_masked_to_12_bits() {
        let log = new_log();
        let mut sampler = Sampler::new(FakeAdc::new(&log, &[0xF123], Some(1)));
        assert!(sampler.sample_all().iter().all(|&s| s == 0x0123));
    }

    #[test]
    fn test_bounded_scan_succeeds() {
        let log = new_log();
        let mut sampler = Sampler::new(FakeAdc::new(&log, &[4095], Some(3)));
        assert_eq!(sampler.sample_all_within(10), Ok([4095; NUM_CHANNELS]));
    }

    #[test]
    fn test_bounded_scan_times_out() {
        let log = new_log();
        let mut sampler = Sampler::new(FakeAdc::new(&log, &[0], None));
        assert_eq!(
            sampler.sample_all_within(100),
            Err(SampleError::Timeout { channel: 0 })
        );
        // never read; rewound instead of cleared
        assert_eq!(ops(&log), [Op::AdcStart, Op::AdcRestart]);
    }

    #[test]
    fn test_scan_after_timeout_stays_aligned() {
        let log = new_log();
        let inputs = [10, 11, 12, 13, 14, 15, 16, 17];
        let adc = FakeAdc::new(&log, &inputs, Some(2)).stall_once(3);
        let mut sampler = Sampler::new(adc);

        assert_eq!(
            sampler.sample_all_within(20),
            Err(SampleError::Timeout { channel: 3 })
        );
        // each input lands in its own slot on every later scan
        assert_eq!(sampler.sample_all_within(20), Ok(inputs));
        assert_eq!(sampler.sample_all(), inputs);
    }

    #[test]
    fn test_late_conversion_shifts_unrewound_scan() {
        // what a late conversion does to a scan that is not rewound
        let log = new_log();
        let inputs = [10, 11, 12, 13, 14, 15, 16, 17];
        let mut adc = FakeAdc::new(&log, &inputs, Some(2)).stall_once(0);
        adc.start();
        assert!(!adc.is_conversion_complete());

        let mut sampler = Sampler::new(adc);
        assert_eq!(sampler.sample_all()[0], 10);
        assert_eq!(sampler.sample_all()[0], 17);
    }
}
