use std::rc::Rc;

pub const TYPE_DELAY_MS: u32 = 80;
pub const DELETE_DELAY_MS: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Deleting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Rc<[String]>,
    phrase_index: usize,
    visible_chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, P>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases: Rc<[String]> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            visible_chars: 0,
            deleting: false,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    pub fn phase(&self) -> TypingPhase {
        if self.deleting {
            TypingPhase::Deleting
        } else {
            TypingPhase::Typing
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn visible(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.visible_chars) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        }
    }

    pub fn tick(&mut self) {
        let full = self.current_phrase().chars().count();
        if self.deleting {
            self.visible_chars = self.visible_chars.saturating_sub(1);
            if self.visible_chars == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            }
        } else {
            self.visible_chars = (self.visible_chars + 1).min(full);
            if self.visible_chars == full {
                self.deleting = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(typewriter: &mut Typewriter, ticks: usize) -> Vec<String> {
        (0..ticks)
            .map(|_| {
                typewriter.tick();
                typewriter.visible().to_string()
            })
            .collect()
    }

    #[test]
    fn rejects_empty_list() {
        assert!(Typewriter::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn types_deletes_and_advances() {
        let mut typewriter = Typewriter::new(["Hi", "Yo"]).unwrap();
        assert_eq!(typewriter.visible(), "");
        assert_eq!(typewriter.delay_ms(), TYPE_DELAY_MS);

        let frames = run(&mut typewriter, 2);
        assert_eq!(frames, ["H", "Hi"]);
        assert_eq!(typewriter.phase(), TypingPhase::Deleting);
        assert_eq!(typewriter.delay_ms(), DELETE_DELAY_MS);

        let frames = run(&mut typewriter, 2);
        assert_eq!(frames, ["H", ""]);
        assert_eq!(typewriter.phrase_index(), 1);
        assert_eq!(typewriter.phase(), TypingPhase::Typing);

        let frames = run(&mut typewriter, 4);
        assert_eq!(frames, ["Y", "Yo", "Y", ""]);
        assert_eq!(typewriter.phrase_index(), 0);
    }

    #[test]
    fn cycle_is_deterministic() {
        let mut a = Typewriter::new(["Hi", "Yo"]).unwrap();
        let mut b = a.clone();
        assert_eq!(run(&mut a, 50), run(&mut b, 50));
    }

    #[test]
    fn visible_never_exceeds_phrase() {
        let mut typewriter = Typewriter::new(["añb", "", "ß"]).unwrap();
        for _ in 0..40 {
            typewriter.tick();
            let phrase = typewriter.current_phrase();
            assert!(phrase.starts_with(typewriter.visible()));
            assert!(typewriter.visible().chars().count() <= phrase.chars().count());
        }
    }

    #[test]
    fn empty_phrase_is_skipped_in_two_ticks() {
        let mut typewriter = Typewriter::new(["", "a"]).unwrap();
        typewriter.tick();
        assert!(typewriter.is_deleting());
        typewriter.tick();
        assert_eq!(typewriter.phrase_index(), 1);
        typewriter.tick();
        assert_eq!(typewriter.visible(), "a");
    }
}
