use serde::Serialize;

/// A closed ring of `[lng, lat]` points.
pub type Ring = Vec<[f64; 2]>;

/// Body of `POST /ingest`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPayload {
    pub device_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Seconds since the Unix epoch, taken when the reading is sent.
    pub timestamp: i64,
}

/// Body of `POST /geofences`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeofencePayload {
    pub name: String,
    pub webhook_url: String,
    pub geojson: Geometry,
}

/// GeoJSON geometry object. Only single-ring polygons are produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_payload_uses_snake_case_fields() {
        let payload = LocationPayload {
            device_id: "truck-7".into(),
            latitude: -33.45,
            longitude: -70.66,
            timestamp: 1_700_000_000,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "device_id": "truck-7",
                "latitude": -33.45,
                "longitude": -70.66,
                "timestamp": 1_700_000_000i64,
            })
        );
    }

    #[test]
    fn geofence_payload_nests_polygon_geometry() {
        let payload = GeofencePayload {
            name: "depot".into(),
            webhook_url: "https://hooks.example.com/depot".into(),
            geojson: Geometry::Polygon {
                coordinates: vec![vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [1.0, 2.0]]],
            },
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "depot",
                "webhook_url": "https://hooks.example.com/depot",
                "geojson": {
                    "type": "Polygon",
                    "coordinates": [[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [1.0, 2.0]]],
                },
            })
        );
    }
}
