use crate::assets::status::SlotStatus;
use crate::components::asteroid::Asteroid;
use crate::components::rocket::Rocket;
use crate::components::station::Station;

/// One berth of the rocket fleet. The craft stays `None` until its model
/// resolves; a failed berth stays empty for the whole session.
#[derive(Debug, Clone)]
pub struct RocketBay {
    pub status: SlotStatus,
    pub craft: Option<Rocket>,
}

impl RocketBay {
    fn vacant() -> Self {
        Self {
            status: SlotStatus::Pending,
            craft: None,
        }
    }
}

/// Scene storage: one optional station, a fixed-count asteroid field, and
/// a fixed-count rocket fleet.
///
/// Group sizes are set once at init. Re-layout mutates members in place;
/// nothing here is ever destroyed and recreated. Iteration yields ready
/// members only, so callers never test for absence themselves.
pub struct Scene {
    station_status: SlotStatus,
    station: Option<Station>,
    asteroids: Vec<Asteroid>,
    bays: Vec<RocketBay>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            station_status: SlotStatus::Pending,
            station: None,
            asteroids: Vec::new(),
            bays: Vec::new(),
        }
    }

    // -- Station group (0 or 1) --

    /// Admit the station. The group never grows past one; a repeat call
    /// replaces the transform.
    pub fn dock_station(&mut self, station: Station) {
        self.station = Some(station);
        self.station_status = SlotStatus::Ready;
    }

    pub fn mark_station_failed(&mut self) {
        if !self.station_status.is_ready() {
            self.station_status = SlotStatus::Failed;
        }
    }

    pub fn station_status(&self) -> SlotStatus {
        self.station_status
    }

    pub fn station(&self) -> Option<&Station> {
        self.station.as_ref()
    }

    pub fn station_mut(&mut self) -> Option<&mut Station> {
        self.station.as_mut()
    }

    // -- Asteroid field --

    pub fn push_asteroid(&mut self, rock: Asteroid) {
        self.asteroids.push(rock);
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn asteroids_mut(&mut self) -> &mut [Asteroid] {
        &mut self.asteroids
    }

    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    // -- Rocket fleet --

    /// Reserve the given number of fleet berths, all pending.
    pub fn set_fleet_size(&mut self, count: usize) {
        self.bays = vec![RocketBay::vacant(); count];
    }

    /// Admit a rocket to a berth. Returns false for out-of-range slots.
    pub fn dock_rocket(&mut self, slot: usize, rocket: Rocket) -> bool {
        match self.bays.get_mut(slot) {
            Some(bay) => {
                bay.craft = Some(rocket);
                bay.status = SlotStatus::Ready;
                true
            }
            None => false,
        }
    }

    pub fn mark_rocket_failed(&mut self, slot: usize) {
        if let Some(bay) = self.bays.get_mut(slot) {
            if !bay.status.is_ready() {
                bay.status = SlotStatus::Failed;
            }
        }
    }

    pub fn rocket_status(&self, slot: usize) -> SlotStatus {
        self.bays
            .get(slot)
            .map(|bay| bay.status)
            .unwrap_or(SlotStatus::Failed)
    }

    /// Hull texture index for a berth, if its craft is ready.
    pub fn rocket_skin(&self, slot: usize) -> Option<u32> {
        self.bays
            .get(slot)
            .and_then(|bay| bay.craft.as_ref())
            .map(|craft| craft.skin)
    }

    /// Ready craft only; pending and failed berths are skipped.
    pub fn rockets(&self) -> impl Iterator<Item = &Rocket> {
        self.bays.iter().filter_map(|bay| bay.craft.as_ref())
    }

    pub fn rockets_mut(&mut self) -> impl Iterator<Item = &mut Rocket> {
        self.bays.iter_mut().filter_map(|bay| bay.craft.as_mut())
    }

    /// Berth index alongside each ready craft.
    pub fn rocket_slots(&self) -> impl Iterator<Item = (usize, &Rocket)> {
        self.bays
            .iter()
            .enumerate()
            .filter_map(|(slot, bay)| bay.craft.as_ref().map(|craft| (slot, craft)))
    }

    pub fn rocket_slots_mut(&mut self) -> impl Iterator<Item = (usize, &mut Rocket)> {
        self.bays
            .iter_mut()
            .enumerate()
            .filter_map(|(slot, bay)| bay.craft.as_mut().map(|craft| (slot, craft)))
    }

    /// Number of berths, ready or not.
    pub fn bay_count(&self) -> usize {
        self.bays.len()
    }

    /// Number of ready craft.
    pub fn fleet_size(&self) -> usize {
        self.bays.iter().filter(|bay| bay.craft.is_some()).count()
    }

    /// Live objects across all groups (what the transform buffer holds).
    pub fn object_count(&self) -> usize {
        self.station.is_some() as usize + self.asteroids.len() + self.fleet_size()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::rocket::OrbitParams;

    fn test_rocket(skin: u32) -> Rocket {
        Rocket::new(
            OrbitParams {
                orbit_radius: 3.5,
                orbit_tilt: 0.1,
                angular_speed: 0.002,
                angle_offset: 0.0,
                vertical_offset: 0.0,
                phase: 0.0,
            },
            0.08,
            skin,
        )
    }

    #[test]
    fn station_group_is_zero_or_one() {
        let mut scene = Scene::new();
        assert!(scene.station().is_none());
        assert_eq!(scene.station_status(), SlotStatus::Pending);

        scene.dock_station(Station::new());
        scene.dock_station(Station::new());
        assert!(scene.station().is_some());
        assert_eq!(scene.object_count(), 1);
    }

    #[test]
    fn failure_after_ready_is_ignored() {
        let mut scene = Scene::new();
        scene.dock_station(Station::new());
        scene.mark_station_failed();
        assert_eq!(scene.station_status(), SlotStatus::Ready);
    }

    #[test]
    fn fleet_iterates_ready_craft_only() {
        let mut scene = Scene::new();
        scene.set_fleet_size(8);
        assert_eq!(scene.bay_count(), 8);
        assert_eq!(scene.fleet_size(), 0);

        scene.dock_rocket(0, test_rocket(0));
        scene.dock_rocket(3, test_rocket(1));
        scene.mark_rocket_failed(5);

        assert_eq!(scene.fleet_size(), 2);
        assert_eq!(scene.rocket_status(5), SlotStatus::Failed);
        let slots: Vec<usize> = scene.rocket_slots().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![0, 3]);
    }

    #[test]
    fn out_of_range_dock_is_rejected() {
        let mut scene = Scene::new();
        scene.set_fleet_size(2);
        assert!(!scene.dock_rocket(2, test_rocket(0)));
        assert_eq!(scene.fleet_size(), 0);
    }

    #[test]
    fn rocket_skin_reads_through_the_bay() {
        let mut scene = Scene::new();
        scene.set_fleet_size(2);
        scene.dock_rocket(1, test_rocket(1));
        assert_eq!(scene.rocket_skin(1), Some(1));
        assert_eq!(scene.rocket_skin(0), None);
        assert_eq!(scene.rocket_skin(9), None);
    }
}
