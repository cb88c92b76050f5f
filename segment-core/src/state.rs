//! Display state
//!
//! Holds the text to show. The input side replaces it with [`DisplayState::update`];
//! the render side copies it once per pass with [`DisplayState::snapshot`].
//! Both go through a blocking critical-section mutex, so a reader sees either
//! the whole old text or the whole new text, never a mix.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::config::LengthPolicy;
use crate::scroll::DIGIT_COUNT;

/// Errors returned by [`DisplayState::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateError {
    /// Text does not fit and the state rejects over-long text
    TooLong {
        /// Length of the normalized text in characters
        len: usize,
        /// Maximum accepted length
        max: usize,
    },
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::TooLong { len, max } => write!(
                f,
                "cannot display string because it is too long ({} > {})",
                len, max
            ),
        }
    }
}

impl core::error::Error for UpdateError {}

/// Normalize text for display: surrounding whitespace trimmed, uppercase
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

struct Shared {
    text: String,
    /// Bumped on every accepted update
    generation: u32,
}

/// Text currently shown on a display
///
/// Safe to share between the render loop and an input source. Intended to
/// live in a `static`:
///
/// ```
/// use segment_core::DisplayState;
///
/// static DISPLAY: DisplayState = DisplayState::new();
/// ```
pub struct DisplayState {
    shared: Mutex<CriticalSectionRawMutex, RefCell<Shared>>,
    policy: LengthPolicy,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Create an empty state that scrolls over-long text
    pub const fn new() -> Self {
        Self::with_policy(LengthPolicy::Scroll)
    }

    /// Create an empty state with an explicit length policy
    pub const fn with_policy(policy: LengthPolicy) -> Self {
        Self {
            shared: Mutex::new(RefCell::new(Shared {
                text: String::new(),
                generation: 0,
            })),
            policy,
        }
    }

    /// Length policy applied by [`update`](Self::update)
    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// Replace the text to display
    ///
    /// The text is trimmed and uppercased first. Under
    /// [`LengthPolicy::Scroll`] this never fails. Under
    /// [`LengthPolicy::Reject`] text longer than four characters is refused
    /// and the current text is kept.
    pub fn update(&self, text: &str) -> Result<(), UpdateError> {
        let text = normalize(text);

        if self.policy == LengthPolicy::Reject {
            let len = text.chars().count();
            if len > DIGIT_COUNT {
                return Err(UpdateError::TooLong {
                    len,
                    max: DIGIT_COUNT,
                });
            }
        }

        let previous = self.shared.lock(|shared| {
            let mut shared = shared.borrow_mut();
            shared.generation = shared.generation.wrapping_add(1);
            core::mem::replace(&mut shared.text, text)
        });
        // Old text is freed outside the critical section
        drop(previous);
        Ok(())
    }

    /// Copy of the current text
    pub fn text(&self) -> String {
        self.shared.lock(|shared| shared.borrow().text.clone())
    }

    /// Number of accepted updates so far (wrapping)
    pub fn generation(&self) -> u32 {
        self.shared.lock(|shared| shared.borrow().generation)
    }

    /// Refresh `snapshot` if the text changed since it was taken
    ///
    /// Returns `true` when the snapshot was replaced.
    pub fn snapshot(&self, snapshot: &mut Snapshot) -> bool {
        self.shared.lock(|shared| {
            let shared = shared.borrow();
            if snapshot.generation == Some(shared.generation) {
                return false;
            }
            snapshot.chars.clear();
            snapshot.chars.extend(shared.text.chars());
            snapshot.generation = Some(shared.generation);
            true
        })
    }
}

/// Render-side copy of the display text
///
/// Kept by the renderer between passes so the characters are only copied
/// when the text actually changed.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    chars: Vec<char>,
    generation: Option<u32>,
}

impl Snapshot {
    /// Empty snapshot that will be filled on the first refresh
    pub const fn new() -> Self {
        Self {
            chars: Vec::new(),
            generation: None,
        }
    }

    /// Characters of the text, one per digit position
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Generation of the text this snapshot holds
    pub fn generation(&self) -> Option<u32> {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::thread;

    #[test]
    fn test_update_trims_and_uppercases() {
        let state = DisplayState::new();
        state.update("  hello  ").unwrap();
        assert_eq!(state.text(), "HELLO");
    }

    #[test]
    fn test_update_trailing_newline() {
        let state = DisplayState::new();
        state.update("12.34\n").unwrap();
        assert_eq!(state.text(), "12.34");
    }

    #[test]
    fn test_long_text_accepted_by_default() {
        let state = DisplayState::new();
        state.update("a rather long message").unwrap();
        assert_eq!(state.text(), "A RATHER LONG MESSAGE");
        assert_eq!(state.policy(), LengthPolicy::Scroll);
    }

    #[test]
    fn test_reject_policy_keeps_previous_text() {
        let state = DisplayState::with_policy(LengthPolicy::Reject);
        state.update("ok").unwrap();

        let err = state.update("hello").unwrap_err();
        assert_eq!(err, UpdateError::TooLong { len: 5, max: 4 });
        assert_eq!(state.text(), "OK");
        assert_eq!(state.generation(), 1);

        // Length is checked after trimming
        state.update("  abcd  ").unwrap();
        assert_eq!(state.text(), "ABCD");
    }

    #[test]
    fn test_snapshot_only_copies_on_change() {
        let state = DisplayState::new();
        let mut snapshot = Snapshot::new();

        // First refresh always copies, even the empty initial text
        assert!(state.snapshot(&mut snapshot));
        assert!(snapshot.chars().is_empty());
        assert_eq!(snapshot.generation(), Some(0));

        assert!(!state.snapshot(&mut snapshot));

        state.update("test").unwrap();
        assert!(state.snapshot(&mut snapshot));
        assert_eq!(snapshot.chars(), &['T', 'E', 'S', 'T']);
        assert!(!state.snapshot(&mut snapshot));
    }

    #[test]
    fn test_same_text_still_bumps_generation() {
        let state = DisplayState::new();
        state.update("A").unwrap();
        state.update("A").unwrap();
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_concurrent_updates_never_tear() {
        static STATE: DisplayState = DisplayState::new();
        const TEXTS: [&str; 2] = ["AAAAAAAAAAAAAAAA", "BBBBBBBBBBBBBBBB"];

        let writer = thread::spawn(|| {
            for i in 0..2_000 {
                STATE.update(TEXTS[i % 2]).unwrap();
            }
        });

        let mut snapshot = Snapshot::new();
        while !writer.is_finished() {
            if STATE.snapshot(&mut snapshot) {
                let chars = snapshot.chars();
                if let Some(first) = chars.first() {
                    assert!(chars.iter().all(|c| c == first), "torn read: {:?}", chars);
                }
            }
        }
        writer.join().unwrap();
        assert_eq!(STATE.generation(), 2_000);
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(text in "[ \\ta-zA-Z0-9.#-]{0,24}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert_eq!(once.trim(), once.as_str());
        }
    }
}
