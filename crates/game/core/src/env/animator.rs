/// Discrete animation state forwarded to the engine's animation graph.
///
/// The sink implementation owns the mapping onto its animator's parameters;
/// the behavior engine only names states.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AnimState {
    #[default]
    Idle,
    Move,
    Alert,
    Pursue,
    Dead,
}

/// One-shot animation trigger pulses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AnimTrigger {
    Death,
    Attack,
    LookAround,
}

/// Handle onto the engine's animation graph for one character.
///
/// The behavior engine writes a discrete state, a continuous speed, and
/// trigger pulses. It never reads animation progress to drive logic except
/// through the two completion queries, which the engine answers by matching
/// a named tag and checking normalized time >= 1.0.
pub trait AnimatorHandle {
    fn set_state(&mut self, state: AnimState);

    fn set_speed(&mut self, speed: f32);

    fn set_crouched(&mut self, crouched: bool);

    fn fire_trigger(&mut self, trigger: AnimTrigger);

    /// Whether the attack clip has played to completion.
    fn is_attack_finished(&self) -> bool;

    /// Whether the death clip has played to completion.
    fn is_death_finished(&self) -> bool;
}
