/// Progress of one run through the story lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteState {
    Unauthenticated,
    Authenticated,
    StoryCreated,
    StoryEdited,
    StoryDeleted,
    StoryDeletionFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteEvent {
    Authenticated,
    StoryCreated,
    StoryEdited,
    StoryDeleted,
    StoryDeletionFailed,
}

impl SuiteState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SuiteState::StoryDeleted | SuiteState::StoryDeletionFailed
        )
    }

    /// Applies `event`. Events that do not fit the current state leave it
    /// unchanged.
    pub fn advance(self, event: SuiteEvent) -> SuiteState {
        use SuiteState as S;
        let next = match (self, event) {
            (S::Unauthenticated, SuiteEvent::Authenticated) => S::Authenticated,
            (S::Authenticated, SuiteEvent::StoryCreated) => S::StoryCreated,
            (S::StoryCreated, SuiteEvent::StoryEdited) => S::StoryEdited,
            // A failed edit does not stop the created story from being deleted.
            (S::StoryCreated | S::StoryEdited, SuiteEvent::StoryDeleted) => S::StoryDeleted,
            (S::StoryCreated | S::StoryEdited, SuiteEvent::StoryDeletionFailed) => {
                S::StoryDeletionFailed
            }
            (state, event) => {
                tracing::warn!("Ignoring event {:?} in state {:?}", event, state);
                state
            }
        };
        tracing::debug!("Suite state: {:?} -> {:?}", self, next);
        next
    }
}
