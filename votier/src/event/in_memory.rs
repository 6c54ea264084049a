use super::{Event, EventLog, EventLogEntry};
use votier_common::types::SequenceNumber;

#[derive(Default, Clone, Debug)]
pub struct InMemoryEventLog {
    entries: Vec<EventLogEntry>,
}

impl EventLog for InMemoryEventLog {
    fn append(&mut self, event: Event) -> &EventLogEntry {
        let sequence = self.last_sequence() + 1;
        self.entries.push(EventLogEntry::new(sequence, event));
        &self.entries[self.entries.len() - 1]
    }

    fn get(&self, sequence: SequenceNumber) -> Option<&EventLogEntry> {
        if 0 < sequence && sequence <= self.last_sequence() {
            Some(&self.entries[sequence as usize - 1])
        } else {
            None
        }
    }

    fn range(&self, from: SequenceNumber, to: SequenceNumber) -> &[EventLogEntry] {
        let from = from.max(1);
        let to = to.min(self.last_sequence());
        if from > to {
            &[]
        } else {
            &self.entries[(from as usize - 1)..(to as usize)]
        }
    }

    fn entries(&self) -> &[EventLogEntry] {
        &self.entries
    }

    fn last_sequence(&self) -> SequenceNumber {
        self.entries.len() as SequenceNumber
    }
}
