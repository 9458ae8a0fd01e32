//! Week ordering and grid assembly for rendering and export.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::time_slot::{TimeSlot, Weekday};

/// One cell of a class grid: either free or occupied by the slot that
/// starts at the cell's (day, time) coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum GridCell {
    Free,
    Busy(TimeSlot),
}

/// One row of a class grid, covering a single start time across every
/// active day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub start_minute: u16,
    /// Parallel to [`Grid::days`].
    pub cells: Vec<GridCell>,
}

/// The day × time matrix for one class's week. Sparse on both axes: only
/// days with at least one slot and only start times actually in use are
/// materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub days: Vec<Weekday>,
    pub rows: Vec<GridRow>,
}

/// Sorts a week's slots into canonical display/export order: Monday through
/// Saturday, then ascending start time. The sort is stable, so slots sharing
/// a day and start time keep their incoming relative order, and feeding an
/// already-sorted list back through changes nothing.
pub fn sort_week(slots: &mut [TimeSlot]) {
    slots.sort_by_key(|slot| (slot.day, slot.start_minute));
}

/// The sorted set of distinct start times present in `slots`. Grid rows are
/// built from these rather than from every possible half-hour of the day.
pub fn used_time_labels(slots: &[TimeSlot]) -> Vec<u16> {
    let mut labels: Vec<u16> = slots.iter().map(|slot| slot.start_minute).collect();
    labels.sort_unstable();
    labels.dedup();
    labels
}

/// Assembles the sparse day × time grid for one class's slots. Days with no
/// slots contribute no column; a cell is busy when a slot starts exactly at
/// its (day, time) coordinate.
pub fn build_grid(class_slots: &[TimeSlot]) -> Grid {
    let mut ordered = class_slots.to_vec();
    sort_week(&mut ordered);

    let mut days: Vec<Weekday> = ordered.iter().map(|slot| slot.day).collect();
    days.sort_unstable();
    days.dedup();

    let rows = used_time_labels(&ordered)
        .into_iter()
        .map(|start_minute| GridRow {
            start_minute,
            cells: days
                .iter()
                .map(|&day| {
                    ordered
                        .iter()
                        .find(|slot| slot.day == day && slot.start_minute == start_minute)
                        .map(|slot| GridCell::Busy(slot.clone()))
                        .unwrap_or(GridCell::Free)
                })
                .collect(),
        })
        .collect();

    Grid { days, rows }
}

/// Groups an entire timetable by class, each class's entries in canonical
/// week order. The map is ordered by class id, which is the order an
/// exporter walks when producing a per-class report.
pub fn group_by_class(all_slots: &[TimeSlot]) -> BTreeMap<String, Vec<TimeSlot>> {
    let mut groups: BTreeMap<String, Vec<TimeSlot>> = BTreeMap::new();
    for slot in all_slots {
        groups
            .entry(slot.class_id.clone())
            .or_default()
            .push(slot.clone());
    }
    for entries in groups.values_mut() {
        sort_week(entries);
    }
    groups
}
