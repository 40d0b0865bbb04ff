//! Datos iniciales de la flota
//!
//! Las 20 grúas de referencia con las que arranca el registro.

use crate::models::vehicle::{Vehicle, VehicleStatus};

pub fn initial_vehicles() -> Vec<Vehicle> {
    use VehicleStatus::{Active, Busy, Offline};

    vec![
        Vehicle::new("TOW-001", Active, "QuickFix Towing", "Mike", 40.7128, -74.006, 4.9),
        Vehicle::new("TOW-002", Busy, "AAA Official Rescue", "Sarah", 40.73, -74.05, 4.8),
        Vehicle::new("TOW-003", Active, "Zhang's Garage", "Zhang", 40.8, -73.95, 4.5),
        Vehicle::new("TOW-004", Active, "Brooklyn Best Tow", "Tony", 40.6782, -73.9442, 4.7),
        Vehicle::new("TOW-005", Offline, "Queens Rapid Response", "Peter", 40.7282, -73.7949, 4.2),
        Vehicle::new("TOW-006", Active, "Staten Island Rescue", "Vinny", 40.5795, -74.1502, 4.6),
        Vehicle::new("TOW-007", Busy, "Bronx Heavy Duty", "Marcus", 40.8448, -73.8648, 4.4),
        Vehicle::new("TOW-008", Active, "Manhattan Elite", "Jessica", 40.7831, -73.9712, 5.0),
        Vehicle::new("TOW-009", Offline, "Jersey City Haul", "Bill", 40.7178, -74.0431, 4.3),
        Vehicle::new("TOW-010", Active, "Newark Tow Masters", "Jamal", 40.7357, -74.1724, 4.1),
        Vehicle::new("TOW-011", Busy, "Hoboken Hook", "Alex", 40.744, -74.0324, 4.8),
        Vehicle::new("TOW-012", Active, "Long Island Express", "Ken", 40.74, -73.6, 4.6),
        Vehicle::new("TOW-013", Active, "Yonkers Yellow Truck", "Luis", 40.9312, -73.8987, 4.5),
        Vehicle::new("TOW-014", Offline, "Greenwich Village Tow", "Emily", 40.7336, -74.0027, 4.9),
        Vehicle::new("TOW-015", Active, "Harlem Night Shift", "Tyrone", 40.8116, -73.9465, 4.7),
        Vehicle::new("TOW-016", Busy, "Astoria Auto Aid", "Dimitri", 40.7644, -73.9235, 4.4),
        Vehicle::new("TOW-017", Active, "Flushing Flatbed", "Wei", 40.7674, -73.8331, 4.3),
        Vehicle::new("TOW-018", Active, "Red Hook Recovery", "Sam", 40.6734, -74.0083, 4.8),
        Vehicle::new("TOW-019", Offline, "Williamsburg Wheels", "Hip", 40.7126, -73.96, 4.2),
        Vehicle::new("TOW-020", Busy, "Midtown Mechanics", "Rock", 40.7549, -73.984, 4.9),
    ]
}
