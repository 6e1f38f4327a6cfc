use serde::Serialize;

pub trait RecordSource {
    type Record;

    fn next_record(&mut self) -> Self::Record;
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UserEvent {
    pub user_id: String,
    pub event: String,
    pub company: String,
}

/// Yields the same example event on every call.
pub struct ExampleEvents {
    event: UserEvent,
}

impl Default for ExampleEvents {
    fn default() -> Self {
        Self {
            event: UserEvent {
                user_id: "calvin".to_owned(),
                event: "ate a bagel".to_owned(),
                company: "Segment".to_owned(),
            },
        }
    }
}

impl RecordSource for ExampleEvents {
    type Record = UserEvent;

    fn next_record(&mut self) -> UserEvent {
        self.event.clone()
    }
}
