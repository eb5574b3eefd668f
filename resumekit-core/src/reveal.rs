//! Password reveal sessions.
//!
//! A field is either masked or unmasked with a pending auto re-mask. Every
//! reveal opens a numbered session; a re-mask timer only applies to the
//! session that scheduled it, so a timer left over from an earlier reveal can
//! never flip a later one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Masked,
    Unmasked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealSession(u64);

impl RevealSession {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// Field is now plaintext; schedule a re-mask for this session
    Revealed(RevealSession),
    /// Field was re-masked by hand; the pending timer for this session is void
    Masked { cancelled: RevealSession },
}

#[derive(Debug, Clone, Default)]
pub struct PasswordReveal {
    state: RevealState,
    session: u64,
}

impl PasswordReveal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a field's reveal state from values kept outside the machine,
    /// such as attributes on the input element.
    #[must_use]
    pub const fn resume(state: RevealState, session: u64) -> Self {
        Self { state, session }
    }

    /// Id of the most recent reveal session, `0` before the first reveal
    #[must_use]
    pub const fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub const fn is_masked(&self) -> bool {
        matches!(self.state, RevealState::Masked)
    }

    /// Handle a click on the toggle control
    pub fn toggle(&mut self) -> RevealTransition {
        match self.state {
            RevealState::Masked => {
                self.session = self.session.wrapping_add(1);
                self.state = RevealState::Unmasked;
                RevealTransition::Revealed(RevealSession(self.session))
            }
            RevealState::Unmasked => {
                self.state = RevealState::Masked;
                RevealTransition::Masked {
                    cancelled: RevealSession(self.session),
                }
            }
        }
    }

    /// Handle the auto re-mask timer. Returns `true` when the field should be
    /// masked now, `false` when the timer is stale.
    pub fn timer_fired(&mut self, session: RevealSession) -> bool {
        if self.state == RevealState::Unmasked && session.0 == self.session {
            self.state = RevealState::Masked;
            true
        } else {
            false
        }
    }
}
