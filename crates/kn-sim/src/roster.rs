//! Dog slots, indexed by `DogId`.

use kn_behavior::Dog;
use kn_core::DogId;
use kn_mobility::{KinematicAgent, Wander};
use kn_pension::ProviderLookup;

/// The dog type the kennel simulates.
pub type KennelDogCore = Dog<KinematicAgent>;

/// One dog in the pension together with its idle roaming.
pub struct KennelDog {
    pub dog:    KennelDogCore,
    pub wander: Wander,
}

/// Slot roster.  `DogId(i)` lives in slot `i`; a despawned dog leaves an
/// empty slot behind so ids are never reused within a session.
#[derive(Default)]
pub struct DogRoster {
    slots: Vec<Option<KennelDog>>,
}

impl DogRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next pushed dog will get.
    #[inline]
    pub fn next_id(&self) -> DogId {
        DogId(self.slots.len() as u32)
    }

    /// Append a dog in a fresh slot.  The caller builds the dog with
    /// [`next_id`][Self::next_id].
    pub(crate) fn push(&mut self, dog: KennelDog) -> DogId {
        let id = self.next_id();
        debug_assert_eq!(dog.dog.id(), id, "dog pushed into the wrong slot");
        self.slots.push(Some(dog));
        id
    }

    /// Empty the slot of `id`, returning its dog.
    pub(crate) fn take(&mut self, id: DogId) -> Option<KennelDog> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    pub fn get(&self, id: DogId) -> Option<&KennelDog> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: DogId) -> Option<&mut KennelDog> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Number of slots ever allocated, empty ones included.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of dogs currently in the pension.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Live dogs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &KennelDog> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut KennelDog> {
        self.slots.iter_mut().flatten()
    }
}

impl ProviderLookup for DogRoster {
    type Provider = KennelDogCore;

    fn provider(&self, id: DogId) -> Option<&KennelDogCore> {
        self.get(id).map(|k| &k.dog)
    }
}
