//! `kn-behavior`: the dog behavior state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                          |
//! |----------------|-------------------------------------------------------------------|
//! | [`navigation`] | `Navigator` trait: move commands and arrival queries             |
//! | [`bowl`]       | `Bowl` trait, `FoodBowl`                                          |
//! | [`timer`]      | `Countdown`: tick-driven, cancellable timer                      |
//! | [`context`]    | `DogContext<'a>`: everything a state may touch during one call   |
//! | [`state`]      | `StateTag`, `DogState` trait, `UrgentNeed`                        |
//! | [`states`]     | `IdleState`, `WalkState`, `MoveToBowlState`, `EatingState`, `HungryState` |
//! | [`machine`]    | `DogStateMachine`: state arena, urgency rule, transitions        |
//! | [`dog`]        | `Dog<N>`: needs + machine + navigator, one simulated dog         |
//! | [`events`]     | `BehaviorEvent` outbox entries                                    |
//!
//! # Design notes
//!
//! States never call back into the machine.  `DogState::process` returns the
//! tag it wants to move to and the machine performs the exit/enter sequence,
//! so no state holds a reference to its owner.
//!
//! The machine builds all five states once and keeps them in an arena indexed
//! by [`StateTag`]; transitions never allocate.
//!
//! One call to [`Dog::process`] runs, in order: need decay, urgency ranking,
//! the Idle-only urgency rule, then the current state's `process`.

pub mod bowl;
pub mod context;
pub mod dog;
pub mod events;
pub mod machine;
pub mod navigation;
pub mod state;
pub mod states;
pub mod timer;


pub use bowl::{Bowl, FoodBowl};
pub use context::{DogContext, DogSignals};
pub use dog::Dog;
pub use events::BehaviorEvent;
pub use machine::DogStateMachine;
pub use navigation::{ARRIVAL_EPSILON, Navigator};
pub use state::{DogState, StateTag, UrgentNeed, VELOCITY_EPSILON};
pub use states::{EatingState, HungryState, IdleState, MoveToBowlState, WalkState};
pub use timer::Countdown;
