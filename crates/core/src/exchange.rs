/// Lifecycle of the widget's network exchange.
///
/// At most one request is ever outstanding; [`ExchangeState::begin`]
/// enforces that by rejecting submissions outside `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangePhase {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// A request is outstanding.
    Sending,
    /// The server concluded the conversation. Terminal until reload.
    Ended,
}

/// Control surface derived from the exchange phase.
///
/// The DOM layer applies these flags wholesale instead of toggling
/// individual controls at scattered call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlags {
    /// The message textarea accepts typing.
    pub input_enabled: bool,
    /// The send control accepts a submission.
    pub send_enabled: bool,
    /// The typing indicator is shown.
    pub typing_visible: bool,
    /// The session is over and the lockout placeholder applies.
    pub ended: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ExchangeState {
    phase: ExchangePhase,
}

impl ExchangeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ExchangePhase {
        self.phase
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, ExchangePhase::Idle)
    }

    /// Starts a new exchange.
    ///
    /// Returns `false` when a request is already outstanding or the
    /// session has ended; the caller must not send in that case.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = ExchangePhase::Sending;
        true
    }

    /// Resolves the outstanding exchange after a successful response.
    ///
    /// A truthy end flag moves the session into its terminal phase.
    /// Ignored unless a request is outstanding, so a terminal session
    /// can never be revived by a stray completion.
    pub fn complete(&mut self, session_ended: bool) {
        if matches!(self.phase, ExchangePhase::Sending) {
            self.phase = if session_ended {
                ExchangePhase::Ended
            } else {
                ExchangePhase::Idle
            };
        }
    }

    /// Resolves the outstanding exchange after a failure.
    ///
    /// Failures always return to `Idle`; only a successful response can
    /// end the session.
    pub fn fail(&mut self) {
        if matches!(self.phase, ExchangePhase::Sending) {
            self.phase = ExchangePhase::Idle;
        }
    }

    pub fn controls(&self) -> ControlFlags {
        match self.phase {
            ExchangePhase::Idle => ControlFlags {
                input_enabled: true,
                send_enabled: true,
                typing_visible: false,
                ended: false,
            },
            // The textarea stays live while sending; only the send
            // control serializes submissions.
            ExchangePhase::Sending => ControlFlags {
                input_enabled: true,
                send_enabled: false,
                typing_visible: true,
                ended: false,
            },
            ExchangePhase::Ended => ControlFlags {
                input_enabled: false,
                send_enabled: false,
                typing_visible: false,
                ended: true,
            },
        }
    }
}
