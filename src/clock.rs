/// Wall-clock time on a 12-hour dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// 1..=12
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=59
    pub second: u8,
}

const SECS_PER_DIAL: u64 = 12 * 60 * 60;

impl TimeOfDay {
    /// Builds a time, folding out-of-range fields back onto the dial.
    ///
    /// Hours are taken modulo 12 with 0 shown as 12, so a 24-hour value is
    /// accepted as well.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: wrap_hour(hour),
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Hour shown on the face: one ahead while summer time is on, 12 wraps to 1.
    pub const fn displayed_hour(&self, summer: bool) -> u8 {
        if summer {
            next_hour(self.hour)
        } else {
            self.hour
        }
    }

    /// Steps the hour forward; 13 wraps to 1. Minutes are untouched.
    pub fn increment_hour(&mut self) {
        self.hour = next_hour(self.hour);
    }

    /// Steps the minute forward modulo 60 without carrying into the hour.
    pub fn increment_minute(&mut self) {
        self.minute = (self.minute + 1) % 60;
    }

    /// Returns the time `secs` seconds later, carrying through the 12-hour dial.
    pub const fn advanced_by(&self, secs: u64) -> Self {
        let hour = (self.hour % 12) as u64;
        let start = hour * 3600 + self.minute as u64 * 60 + self.second as u64;
        let total = (start + secs % SECS_PER_DIAL) % SECS_PER_DIAL;

        Self {
            hour: wrap_hour((total / 3600) as u8),
            minute: ((total / 60) % 60) as u8,
            second: (total % 60) as u8,
        }
    }
}

/// The hour after `hour` on a 1..=12 dial.
pub const fn next_hour(hour: u8) -> u8 {
    wrap_hour(wrap_hour(hour) + 1)
}

/// The hour before `hour` on a 1..=12 dial.
pub const fn previous_hour(hour: u8) -> u8 {
    wrap_hour(wrap_hour(hour) + 11)
}

pub const fn wrap_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_folds_fields_onto_the_dial() {
        assert_eq!(TimeOfDay::new(0, 75, 61), TimeOfDay { hour: 12, minute: 15, second: 1 });
        assert_eq!(TimeOfDay::new(13, 5, 0).hour, 1);
        assert_eq!(TimeOfDay::new(23, 5, 0).hour, 11);
    }

    #[test]
    fn summer_time_wraps_twelve_to_one() {
        let noon = TimeOfDay::new(12, 0, 0);
        assert_eq!(noon.displayed_hour(true), 1);
        assert_eq!(noon.displayed_hour(false), 12);
        assert_eq!(TimeOfDay::new(7, 0, 0).displayed_hour(true), 8);
    }

    #[test]
    fn hour_steps_stay_on_the_dial_and_cycle() {
        for start in 1..=12 {
            let mut time = TimeOfDay::new(start, 30, 0);
            for _ in 0..12 {
                time.increment_hour();
                assert!((1..=12).contains(&time.hour));
            }
            assert_eq!(time.hour, start);
            assert_eq!(time.minute, 30);
        }
    }

    #[test]
    fn sixty_minute_steps_return_to_start_without_carry() {
        let mut time = TimeOfDay::new(4, 17, 0);
        for _ in 0..60 {
            time.increment_minute();
            assert_eq!(time.hour, 4);
        }
        assert_eq!(time.minute, 17);
    }

    #[test]
    fn advancing_carries_through_minutes_and_hours() {
        let time = TimeOfDay::new(12, 59, 59);
        assert_eq!(time.advanced_by(1), TimeOfDay::new(1, 0, 0));
        assert_eq!(TimeOfDay::new(11, 59, 30).advanced_by(45), TimeOfDay::new(12, 0, 15));
        assert_eq!(TimeOfDay::new(3, 0, 0).advanced_by(SECS_PER_DIAL), TimeOfDay::new(3, 0, 0));
    }

    #[test]
    fn previous_hour_undoes_next_hour() {
        for hour in 1..=12 {
            assert_eq!(previous_hour(next_hour(hour)), hour);
        }
        assert_eq!(previous_hour(1), 12);
    }
}
