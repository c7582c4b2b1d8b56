use crate::domain::model::{CarrierDefinition, CarrierId};

/// Known carriers in detection priority order.
///
/// Order is significant: rule sets overlap (a 10 digit number satisfies both
/// ACS and Geniki) and the earlier entry wins.
pub static CARRIERS: &[CarrierDefinition] = &[
    CarrierDefinition {
        id: CarrierId::BoxNow,
        name: "Box Now",
        color: "#00a551",
        patterns: &[r"^BN\d{8,10}$"],
        endpoint: "https://api-production.boxnow.gr/api/v1/parcels:track",
    },
    CarrierDefinition {
        id: CarrierId::CourierCenter,
        name: "Courier Center",
        color: "#e30613",
        patterns: &[r"^CC\d{8,10}$"],
        endpoint: "https://www.courier.gr/track/result",
    },
    CarrierDefinition {
        id: CarrierId::Speedex,
        name: "Speedex",
        color: "#f7a600",
        patterns: &[r"^SP\d{8,10}$"],
        endpoint: "https://www.speedex.gr/speedex/NewTrackAndTrace.aspx",
    },
    CarrierDefinition {
        id: CarrierId::Elta,
        name: "ELTA Courier",
        color: "#1c4f9c",
        patterns: &[r"^SE\d{9}GR$", r"^EL\d{9}GR$", r"^[A-Z]{2}\d{9}GR$"],
        endpoint: "https://www.elta-courier.gr/track.php",
    },
    CarrierDefinition {
        id: CarrierId::Acs,
        name: "ACS Courier",
        color: "#d71920",
        patterns: &[r"^\d{10}$"],
        endpoint: "https://api.acscourier.net/api/parcels/search",
    },
    CarrierDefinition {
        id: CarrierId::Geniki,
        name: "Geniki Taxydromiki",
        color: "#004a99",
        patterns: &[r"^\d{10,12}$"],
        endpoint: "https://www.taxydromiki.com/track",
    },
];

pub fn carrier(id: CarrierId) -> &'static CarrierDefinition {
    CARRIERS
        .iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| unreachable!("carrier {} missing from registry", id))
}
