/// The stage of the reply requester.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RequestStage {
    /// No request is in flight; submissions are accepted.
    #[default]
    Idle,
    /// A request is in flight; submissions are rejected.
    Awaiting,
}

/// Tracks whether a reply is currently being awaited.
///
/// At most one request may be outstanding at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RequestState {
    stage: RequestStage,
}

impl RequestState {
    /// Returns the current stage.
    #[inline]
    pub fn stage(&self) -> RequestStage {
        self.stage
    }

    /// Returns `true` while a request is in flight.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.stage == RequestStage::Awaiting
    }

    /// Moves to `Awaiting`. Returns `false` if a request is already in
    /// flight.
    #[inline]
    pub(crate) fn try_begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.stage = RequestStage::Awaiting;
        true
    }

    /// Moves back to `Idle`, whatever the outcome of the request was.
    #[inline]
    pub(crate) fn finish(&mut self) {
        self.stage = RequestStage::Idle;
    }
}
