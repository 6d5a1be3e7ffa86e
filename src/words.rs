//! Time-to-words translation for the 8x8 overlay.
//!
//! The overlay reads, top to bottom:
//!
//! ```text
//! A T W E N T Y D
//! Q U A R T E R Y
//! F I V E H A L F
//! D P A S T O R O
//! F I V E I G H T
//! S I X T H R E E
//! T W E L E V E N
//! F O U R N I N E
//! ```
//!
//! Rows 0..=3 hold the minute words and PAST/TO, rows 4..=7 the hours. A
//! few hours borrow letters from more than one row (TWO, SEVEN) or light
//! letters that are not adjacent (ONE, TEN).

use core::fmt::{self, Write as _};

use heapless::Vec;

use crate::clock::{next_hour, wrap_hour};
use crate::display::DisplayFrame;

/// One lit segment: a row and the columns to light in it (bit 7 = column 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WordSpan {
    pub row: u8,
    pub mask: u8,
}

const fn span(row: u8, mask: u8) -> WordSpan {
    WordSpan { row, mask }
}

/// A word on the overlay and the spans that light it.
#[derive(Debug, PartialEq, Eq)]
pub struct Word {
    pub label: &'static str,
    pub spans: &'static [WordSpan],
}

pub const TWENTY: Word = Word { label: "TWENTY", spans: &[span(0, 0b0111_1110)] };
pub const TEN: Word = Word { label: "TEN", spans: &[span(0, 0b0101_1000)] };
pub const QUARTER: Word = Word { label: "QUARTER", spans: &[span(1, 0b1111_1110)] };
pub const FIVE: Word = Word { label: "FIVE", spans: &[span(2, 0b1111_0000)] };
pub const HALF: Word = Word { label: "HALF", spans: &[span(2, 0b0000_1111)] };
pub const PAST: Word = Word { label: "PAST", spans: &[span(3, 0b0111_1000)] };
pub const TO: Word = Word { label: "TO", spans: &[span(3, 0b0000_1100)] };

/// Hour words indexed by `hour - 1`.
pub static HOURS: [Word; 12] = [
    Word { label: "ONE", spans: &[span(7, 0b0100_0011)] },
    Word { label: "TWO", spans: &[span(6, 0b1100_0000), span(7, 0b0100_0000)] },
    Word { label: "THREE", spans: &[span(5, 0b0001_1111)] },
    Word { label: "FOUR", spans: &[span(7, 0b1111_0000)] },
    Word { label: "FIVE", spans: &[span(4, 0b1111_0000)] },
    Word { label: "SIX", spans: &[span(5, 0b1110_0000)] },
    Word { label: "SEVEN", spans: &[span(5, 0b1000_0000), span(6, 0b0000_1111)] },
    Word { label: "EIGHT", spans: &[span(4, 0b0001_1111)] },
    Word { label: "NINE", spans: &[span(7, 0b0000_1111)] },
    Word { label: "TEN", spans: &[span(6, 0b1000_0011)] },
    Word { label: "ELEVEN", spans: &[span(6, 0b0011_1111)] },
    Word { label: "TWELVE", spans: &[span(6, 0b1111_1100)] },
];

/// Where the hour word stands relative to the minute words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Relation {
    OClock,
    Past,
    To,
}

const FIVE_MIN: &[&Word] = &[&FIVE];
const TEN_MIN: &[&Word] = &[&TEN];
const QUARTER_MIN: &[&Word] = &[&QUARTER];
const TWENTY_MIN: &[&Word] = &[&TWENTY];
const TWENTY_FIVE: &[&Word] = &[&TWENTY, &FIVE];
const HALF_MIN: &[&Word] = &[&HALF];

/// A rounding window: minutes `first..=last` are read as `anchor`.
#[derive(Debug)]
pub struct MinuteZone {
    pub anchor: u8,
    pub first: u8,
    pub last: u8,
    pub words: &'static [&'static Word],
    pub relation: Relation,
}

const fn zone(
    anchor: u8,
    first: u8,
    last: u8,
    words: &'static [&'static Word],
    relation: Relation,
) -> MinuteZone {
    MinuteZone {
        anchor,
        first,
        last,
        words,
        relation,
    }
}

/// Ordered rounding table.
///
/// Windows lean away from the half hour: in the PAST half an anchor keeps
/// the three minutes after it (9:23 is still twenty past), in the TO half it
/// takes the three minutes before it (9:38 is already twenty to). PAST covers
/// `3..=32`, TO covers `33..=57`. The top of the hour is split in two so
/// every entry is a plain ascending range: `0..=2` still belongs to this
/// hour, `58..=59` already reads as the next one.
pub static ZONES: [MinuteZone; 13] = [
    zone(0, 0, 2, &[], Relation::OClock),
    zone(5, 3, 8, FIVE_MIN, Relation::Past),
    zone(10, 9, 13, TEN_MIN, Relation::Past),
    zone(15, 14, 18, QUARTER_MIN, Relation::Past),
    zone(20, 19, 23, TWENTY_MIN, Relation::Past),
    zone(25, 24, 28, TWENTY_FIVE, Relation::Past),
    zone(30, 29, 32, HALF_MIN, Relation::Past),
    zone(35, 33, 36, TWENTY_FIVE, Relation::To),
    zone(40, 37, 41, TWENTY_MIN, Relation::To),
    zone(45, 42, 46, QUARTER_MIN, Relation::To),
    zone(50, 47, 51, TEN_MIN, Relation::To),
    zone(55, 52, 57, FIVE_MIN, Relation::To),
    zone(60, 58, 59, &[], Relation::OClock),
];

impl MinuteZone {
    pub const fn contains(&self, minute: u8) -> bool {
        self.first <= minute && minute <= self.last
    }

    /// Past the half hour the phrase names the coming hour.
    pub const fn names_next_hour(&self) -> bool {
        self.anchor > 30
    }
}

/// The zone a minute rounds to. Minutes above 59 wrap first.
pub fn zone_for(minute: u8) -> &'static MinuteZone {
    let minute = minute % 60;
    ZONES
        .iter()
        .find(|zone| zone.contains(minute))
        .unwrap_or(&ZONES[0])
}

/// Most words a phrase can hold: two minute words, PAST/TO, one hour.
pub const MAX_WORDS: usize = 4;

/// The words making up one reading of the clock, in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Phrase {
    words: Vec<&'static Word, MAX_WORDS>,
}

impl Phrase {
    pub fn words(&self) -> &[&'static Word] {
        &self.words
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|w| *w == word)
    }

    fn push(&mut self, word: &'static Word) {
        // Capacity covers the longest phrase in the tables.
        let _ = self.words.push(word);
    }

    /// ORs every span of every word into a fresh frame.
    pub fn frame(&self) -> DisplayFrame {
        let mut frame = DisplayFrame::blank();
        for span in self.words.iter().flat_map(|w| w.spans.iter()) {
            frame.light(span.row as usize, span.mask);
        }
        frame
    }

    /// Writes the phrase as space-separated words into `buf`.
    pub fn describe<'a>(&self, buf: &'a mut [u8]) -> Result<&'a str, fmt::Error> {
        format_no_std::show(buf, format_args!("{}", self))
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            f.write_str(word.label)?;
        }
        Ok(())
    }
}

/// Words for `hour` (1..=12, already summer-adjusted) and `minute`.
pub fn phrase_for(hour: u8, minute: u8) -> Phrase {
    let zone = zone_for(minute);
    let mut phrase = Phrase::default();

    for &word in zone.words {
        phrase.push(word);
    }
    match zone.relation {
        Relation::Past => phrase.push(&PAST),
        Relation::To => phrase.push(&TO),
        Relation::OClock => {}
    }

    let hour = if zone.names_next_hour() {
        next_hour(hour)
    } else {
        wrap_hour(hour)
    };
    phrase.push(&HOURS[(hour - 1) as usize]);

    phrase
}

/// Frame lighting the words for `hour` and `minute`.
pub fn render_words(hour: u8, minute: u8) -> DisplayFrame {
    phrase_for(hour, minute).frame()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour_word(phrase: &Phrase) -> &'static Word {
        phrase.words().last().copied().unwrap()
    }

    #[test]
    fn zones_partition_the_hour() {
        for minute in 0..60u8 {
            let hits = ZONES.iter().filter(|z| z.contains(minute)).count();
            assert_eq!(hits, 1, "minute {minute}");
        }
    }

    #[test]
    fn zones_are_ordered_and_contiguous() {
        assert_eq!(ZONES[0].first, 0);
        assert_eq!(ZONES[ZONES.len() - 1].last, 59);
        for pair in ZONES.windows(2) {
            assert_eq!(pair[0].last + 1, pair[1].first);
        }
    }

    #[test]
    fn window_edges_lean_away_from_the_half_hour() {
        let edges = [
            (2, 0),
            (3, 5),
            (8, 5),
            (9, 10),
            (13, 10),
            (14, 15),
            (19, 20),
            (23, 20),
            (24, 25),
            (28, 25),
            (29, 30),
            (32, 30),
            (33, 35),
            (36, 35),
            (37, 40),
            (38, 40),
            (41, 40),
            (42, 45),
            (47, 50),
            (51, 50),
            (52, 55),
            (57, 55),
            (58, 60),
        ];
        for (minute, anchor) in edges {
            assert_eq!(zone_for(minute).anchor, anchor, "minute {minute}");
        }
    }

    #[test]
    fn top_of_hour_lights_only_the_hour() {
        for hour in 1..=12u8 {
            for minute in [58, 59, 0, 1, 2] {
                let phrase = phrase_for(hour, minute);
                assert_eq!(phrase.words().len(), 1, "{hour}:{minute}");
                assert!(!phrase.contains(&PAST));
                assert!(!phrase.contains(&TO));
                let frame = render_words(hour, minute);
                assert!((0..4).all(|r| frame.row(r) == 0));
            }
        }
    }

    #[test]
    fn exactly_one_relation_and_one_hour() {
        for hour in 1..=12u8 {
            for minute in 0..60u8 {
                let phrase = phrase_for(hour, minute);
                let past = phrase.contains(&PAST);
                let to = phrase.contains(&TO);
                assert!(!(past && to));
                assert_eq!(past, (3..=32).contains(&minute), "{hour}:{minute}");
                assert_eq!(to, (33..=57).contains(&minute), "{hour}:{minute}");
                let hours = phrase
                    .words()
                    .iter()
                    .filter(|w| HOURS.contains(**w))
                    .count();
                assert_eq!(hours, 1);
            }
        }
    }

    #[test]
    fn second_half_names_the_next_hour() {
        for hour in 1..=12u8 {
            for minute in 0..60u8 {
                let expected = if minute >= 33 { hour % 12 + 1 } else { hour };
                let word = hour_word(&phrase_for(hour, minute));
                assert_eq!(word, &HOURS[(expected - 1) as usize], "{hour}:{minute}");
            }
        }
    }

    #[test]
    fn twenty_three_past_nine() {
        let phrase = phrase_for(9, 23);
        assert_eq!(phrase.words(), &[&TWENTY, &PAST, &HOURS[8]]);

        let frame = render_words(9, 23);
        assert_eq!(frame.row(0), 0b0111_1110);
        assert_eq!(frame.row(3), 0b0111_1000);
        assert_eq!(frame.row(7), 0b0000_1111);
        assert_eq!(frame.row(1) | frame.row(2) | frame.row(4) | frame.row(5) | frame.row(6), 0);
    }

    #[test]
    fn twenty_to_ten_at_nine_thirty_eight() {
        let phrase = phrase_for(9, 38);
        assert_eq!(phrase.words(), &[&TWENTY, &TO, &HOURS[9]]);

        let frame = render_words(9, 38);
        assert_eq!(frame.row(0), 0b0111_1110);
        assert_eq!(frame.row(3), 0b0000_1100);
        assert_eq!(frame.row(6), 0b1000_0011);
    }

    #[test]
    fn minutes_near_twenty_read_as_twenty() {
        let mut buf = [0u8; 40];
        assert_eq!(phrase_for(9, 23).describe(&mut buf).unwrap(), "TWENTY PAST NINE");
        assert_eq!(phrase_for(9, 38).describe(&mut buf).unwrap(), "TWENTY TO TEN");
        assert_eq!(phrase_for(9, 19).describe(&mut buf).unwrap(), "TWENTY PAST NINE");
        assert_eq!(phrase_for(9, 41).describe(&mut buf).unwrap(), "TWENTY TO TEN");
    }

    #[test]
    fn twenty_five_uses_two_minute_words() {
        let mut buf = [0u8; 40];
        assert_eq!(phrase_for(12, 26).describe(&mut buf).unwrap(), "TWENTY FIVE PAST TWELVE");
        assert_eq!(phrase_for(12, 36).describe(&mut buf).unwrap(), "TWENTY FIVE TO ONE");
        assert_eq!(phrase_for(4, 45).describe(&mut buf).unwrap(), "QUARTER TO FIVE");
        assert_eq!(phrase_for(4, 30).describe(&mut buf).unwrap(), "HALF PAST FOUR");
        assert_eq!(phrase_for(6, 59).describe(&mut buf).unwrap(), "SEVEN");
    }

    #[test]
    fn minute_five_and_hour_five_light_different_rows() {
        let frame = render_words(5, 5);
        assert_eq!(frame.row(2), 0b1111_0000);
        assert_eq!(frame.row(4), 0b1111_0000);
    }

    #[test]
    fn multi_row_hours_light_every_row() {
        let frame = render_words(7, 0);
        assert_eq!(frame.row(5), 0b1000_0000);
        assert_eq!(frame.row(6), 0b0000_1111);
    }

    #[test]
    fn minute_and_hour_words_use_separate_rows() {
        for zone in ZONES.iter() {
            for &word in zone.words {
                assert!(word.spans.iter().all(|s| s.row < 4));
            }
        }
        for hour in HOURS.iter() {
            assert!(hour.spans.iter().all(|s| (4..8).contains(&s.row)));
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        for minute in 0..60u8 {
            assert_eq!(render_words(3, minute), render_words(3, minute));
        }
    }

    #[test]
    fn describe_reports_short_buffers() {
        let mut buf = [0u8; 4];
        assert!(phrase_for(9, 23).describe(&mut buf).is_err());
    }
}
