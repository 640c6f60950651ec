use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TriggerType {
  Shader,
  Particle,
  Bpm,
  BgPulse,
  BgChange,
  TimeSignature,
}

/// Identity of a trigger, independent of where it is placed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct TriggerId(Uuid);

impl TriggerId {
  pub fn new() -> TriggerId {
    TriggerId(Uuid::new_v4())
  }

  pub fn from_uuid(uuid: Uuid) -> TriggerId {
    TriggerId(uuid)
  }

  pub fn get_uuid(&self) -> &Uuid {
    &self.0
  }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Trigger {
  id: TriggerId,
  trigger_type: TriggerType,
}

impl Trigger {
  pub fn new(trigger_type: TriggerType) -> Trigger {
    Trigger::with_id(TriggerId::new(), trigger_type)
  }

  /// Rebuilds a trigger that already has an identity, e.g. when restoring a snapshot.
  pub fn with_id(id: TriggerId, trigger_type: TriggerType) -> Trigger {
    Trigger { id, trigger_type }
  }

  pub fn get_id(&self) -> TriggerId {
    self.id
  }

  pub fn get_type(&self) -> TriggerType {
    self.trigger_type
  }
}

#[cfg(test)]
mod test {

  use uuid::Uuid;

  use super::{Trigger, TriggerId, TriggerType};

  #[test]
  pub fn new_triggers_have_distinct_ids() {
    let trigger1 = Trigger::new(TriggerType::Shader);
    let trigger2 = Trigger::new(TriggerType::Shader);
    assert_ne!(trigger1.get_id(), trigger2.get_id());
    assert_ne!(trigger1, trigger2);
  }

  #[test]
  pub fn with_id_keeps_identity() {
    let uuid = Uuid::new_v4();
    let trigger = Trigger::with_id(TriggerId::from_uuid(uuid), TriggerType::Bpm);
    assert_eq!(trigger.get_id().get_uuid(), &uuid);
    assert_eq!(trigger.get_type(), TriggerType::Bpm);
  }
}
