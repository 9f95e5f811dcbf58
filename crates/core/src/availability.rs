//! # Availability Engine
//!
//! Derives who (faculty) and what (rooms) is free at every distinct weekly
//! slot, from the slots of every timetable.
//!
//! ## Algorithm
//!
//! 1. Load the entity universe (faculty sorted by name, or rooms sorted by
//!    number) and every timetable slot. The reads are independent and run
//!    concurrently.
//! 2. Drop breaks: slots with neither subject nor room, and slots whose type
//!    is named "Break".
//! 3. Group the remaining slots by `(day, start, end, slot type name)`, first
//!    occurrence wins. This is the slot definition universe.
//! 4. Entity-wise: an entity occupies the slots that reference it; its free
//!    slots are the definitions whose `(day, start, end)` it does not occupy.
//! 5. Slot-wise: for each definition, the entities referenced by a slot at
//!    exactly that `(day, start, end)` are busy and the rest are free.
//!
//! Every list is ordered Monday first, then by start time. Nothing is cached;
//! each call recomputes from a fresh read.
//!
//! Definitions that share a `(day, start, end)` but differ in slot type name
//! stay separate rows, while occupancy is matched on `(day, start, end)` only.
//! Both such rows therefore report the same busy set.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::{
    access::require_principal,
    errors::CampusResult,
    models::{
        availability::{
            FacultyAvailability, FacultyWithSlots, RoomAvailability, RoomWithSlots, SlotInfo,
            SlotWithFreeFaculty, SlotWithFreeRooms,
        },
        room::RoomInfo,
        time_slot::{SlotDefinition, SlotKey, TimeSlotRecord},
        user::{FacultyInfo, Principal},
        week::sort_by_week_position,
    },
    repository::AvailabilitySource,
};

/// An entity that timetable slots can be assigned to.
pub trait Occupant: Clone {
    fn id(&self) -> Uuid;

    /// The id of the entity of this kind that `slot` is assigned to, if any.
    fn assigned_in(slot: &TimeSlotRecord) -> Option<Uuid>;
}

impl Occupant for FacultyInfo {
    fn id(&self) -> Uuid {
        self.id
    }

    fn assigned_in(slot: &TimeSlotRecord) -> Option<Uuid> {
        slot.faculty_id()
    }
}

impl Occupant for RoomInfo {
    fn id(&self) -> Uuid {
        self.id
    }

    fn assigned_in(slot: &TimeSlotRecord) -> Option<Uuid> {
        slot.room_id()
    }
}

/// One entity's week split into occupied and free slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityWeek<E> {
    pub entity: E,
    pub occupied: Vec<SlotInfo>,
    pub free: Vec<SlotInfo>,
}

/// One slot definition's entities split into free and busy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntities<E> {
    pub definition: SlotDefinition,
    pub free: Vec<E>,
    pub busy: Vec<E>,
}

/// Faculty availability for any authenticated caller.
///
/// # Errors
///
/// * `CampusError::Authentication` - no principal; nothing is read
/// * `CampusError::Database` - any read failed; no partial view is returned
pub async fn faculty_availability<S>(
    principal: Option<&Principal>,
    source: &S,
) -> CampusResult<FacultyAvailability>
where
    S: AvailabilitySource + ?Sized,
{
    let principal = require_principal(principal)?;
    debug!("Computing faculty availability for user {}", principal.user_id);

    let (faculty, slots) = tokio::try_join!(source.list_faculty(), source.list_time_slots())?;

    Ok(derive_faculty_availability(faculty, &slots))
}

/// Room availability for any authenticated caller.
///
/// # Errors
///
/// * `CampusError::Authentication` - no principal; nothing is read
/// * `CampusError::Database` - any read failed; no partial view is returned
pub async fn room_availability<S>(
    principal: Option<&Principal>,
    source: &S,
) -> CampusResult<RoomAvailability>
where
    S: AvailabilitySource + ?Sized,
{
    let principal = require_principal(principal)?;
    debug!("Computing room availability for user {}", principal.user_id);

    let (rooms, slots) = tokio::try_join!(source.list_rooms(), source.list_time_slots())?;

    Ok(derive_room_availability(rooms, &slots))
}

pub fn derive_faculty_availability(
    faculty: Vec<FacultyInfo>,
    slots: &[TimeSlotRecord],
) -> FacultyAvailability {
    let slots = teaching_slots(slots);
    let definitions = slot_definitions(slots.iter().copied());
    debug!(
        faculty = faculty.len(),
        slots = slots.len(),
        definitions = definitions.len(),
        "Deriving faculty availability"
    );

    let faculty_wise = entity_wise(&faculty, &slots, &definitions)
        .into_iter()
        .map(|week| FacultyWithSlots {
            faculty: week.entity,
            occupied_slots: week.occupied,
            free_slots: week.free,
        })
        .collect();

    let slot_wise = slot_wise(&faculty, &slots, &definitions)
        .into_iter()
        .map(|row| SlotWithFreeFaculty {
            day: row.definition.day,
            start_time: row.definition.start_time,
            end_time: row.definition.end_time,
            slot_type_name: row.definition.slot_type_name,
            free_faculty: row.free,
            busy_faculty: row.busy,
        })
        .collect();

    FacultyAvailability {
        faculty_wise,
        slot_wise,
    }
}

pub fn derive_room_availability(rooms: Vec<RoomInfo>, slots: &[TimeSlotRecord]) -> RoomAvailability {
    let slots = teaching_slots(slots);
    let definitions = slot_definitions(slots.iter().copied());
    debug!(
        rooms = rooms.len(),
        slots = slots.len(),
        definitions = definitions.len(),
        "Deriving room availability"
    );

    let room_wise = entity_wise(&rooms, &slots, &definitions)
        .into_iter()
        .map(|week| RoomWithSlots {
            room: week.entity,
            occupied_slots: week.occupied,
            free_slots: week.free,
        })
        .collect();

    let slot_wise = slot_wise(&rooms, &slots, &definitions)
        .into_iter()
        .map(|row| SlotWithFreeRooms {
            day: row.definition.day,
            start_time: row.definition.start_time,
            end_time: row.definition.end_time,
            slot_type_name: row.definition.slot_type_name,
            free_rooms: row.free,
            occupied_rooms: row.busy,
        })
        .collect();

    RoomAvailability {
        room_wise,
        slot_wise,
    }
}

/// Every slot that is not a break.
pub fn teaching_slots(slots: &[TimeSlotRecord]) -> Vec<&TimeSlotRecord> {
    slots.iter().filter(|slot| !slot.is_break()).collect()
}

/// The distinct `(day, start, end, slot type name)` definitions among
/// non-break slots, in first-seen order.
pub fn slot_definitions<'a, I>(slots: I) -> Vec<SlotDefinition>
where
    I: IntoIterator<Item = &'a TimeSlotRecord>,
{
    let mut seen = HashSet::new();
    slots
        .into_iter()
        .filter(|slot| !slot.is_break())
        .map(SlotDefinition::from)
        .filter(|definition| seen.insert(definition.clone()))
        .collect()
}

/// Splits every definition into occupied and free for each entity.
///
/// Entities keep their input order; each entity's lists are sorted by week
/// position.
pub fn entity_wise<E: Occupant>(
    entities: &[E],
    slots: &[&TimeSlotRecord],
    definitions: &[SlotDefinition],
) -> Vec<EntityWeek<E>> {
    entities
        .iter()
        .map(|entity| {
            let entity_id = entity.id();
            let assigned: Vec<&TimeSlotRecord> = slots
                .iter()
                .copied()
                .filter(|slot| E::assigned_in(slot) == Some(entity_id))
                .collect();

            let occupied_keys: HashSet<SlotKey> = assigned.iter().map(|slot| slot.key()).collect();

            let mut occupied: Vec<SlotInfo> =
                assigned.iter().map(|slot| SlotInfo::occupied(slot)).collect();
            let mut free: Vec<SlotInfo> = definitions
                .iter()
                .filter(|definition| !occupied_keys.contains(&definition.key()))
                .map(SlotInfo::free)
                .collect();

            sort_by_week_position(&mut occupied);
            sort_by_week_position(&mut free);

            EntityWeek {
                entity: entity.clone(),
                occupied,
                free,
            }
        })
        .collect()
}

/// Splits the entity universe into free and busy for each definition.
///
/// Rows are sorted by week position; within a row, entities keep their
/// input order.
pub fn slot_wise<E: Occupant>(
    entities: &[E],
    slots: &[&TimeSlotRecord],
    definitions: &[SlotDefinition],
) -> Vec<SlotEntities<E>> {
    let mut ordered = definitions.to_vec();
    sort_by_week_position(&mut ordered);

    ordered
        .into_iter()
        .map(|definition| {
            let key = definition.key();
            let busy_ids: HashSet<Uuid> = slots
                .iter()
                .filter(|slot| slot.key() == key)
                .filter_map(|slot| E::assigned_in(slot))
                .collect();

            let (busy, free): (Vec<E>, Vec<E>) = entities
                .iter()
                .cloned()
                .partition(|entity| busy_ids.contains(&entity.id()));

            SlotEntities {
                definition,
                free,
                busy,
            }
        })
        .collect()
}
