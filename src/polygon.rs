use crate::error::ValidationError;
use crate::types::{Geometry, Ring};

/// Converts `[lat, lng]` pairs into a closed GeoJSON polygon.
///
/// Each pair is swapped to `[lng, lat]` keeping the input order. If the first and last
/// points differ, the first point is appended to close the ring; an already closed input
/// is left as is.
pub fn polygon_from_lat_lng<C>(coordinates: &[C]) -> Result<Geometry, ValidationError>
where
    C: AsRef<[f64]>,
{
    if coordinates.len() < 3 {
        return Err(ValidationError::TooFewCoordinates(coordinates.len()));
    }

    let mut ring: Ring = Vec::with_capacity(coordinates.len() + 1);
    for pair in coordinates {
        match pair.as_ref() {
            [lat, lng] => ring.push([*lng, *lat]),
            other => return Err(ValidationError::InvalidCoordinate(other.to_vec())),
        }
    }

    let first = ring[0];
    let last = ring[ring.len() - 1];
    if first[0] != last[0] || first[1] != last[1] {
        ring.push(first);
    }

    Ok(Geometry::Polygon {
        coordinates: vec![ring],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(geometry: Geometry) -> Ring {
        let Geometry::Polygon { mut coordinates } = geometry;
        assert_eq!(coordinates.len(), 1);
        coordinates.remove(0)
    }

    #[test]
    fn swaps_and_closes_open_ring() {
        let geometry = polygon_from_lat_lng(&[[10.0, 20.0], [11.0, 21.0], [12.0, 22.0]]).unwrap();

        assert_eq!(
            ring_of(geometry),
            vec![[20.0, 10.0], [21.0, 11.0], [22.0, 12.0], [20.0, 10.0]]
        );
    }

    #[test]
    fn does_not_duplicate_closing_point() {
        let geometry = polygon_from_lat_lng(&[
            [10.0, 20.0],
            [11.0, 21.0],
            [12.0, 22.0],
            [10.0, 20.0],
        ])
        .unwrap();

        let ring = ring_of(geometry);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);
    }

    #[test]
    fn closes_ring_when_only_one_component_differs() {
        let geometry = polygon_from_lat_lng(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [1.0, 9.0]])
            .unwrap();

        let ring = ring_of(geometry);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[4], [2.0, 1.0]);
    }

    #[test]
    fn passes_out_of_range_values_through() {
        let geometry =
            polygon_from_lat_lng(&[[95.0, 200.0], [-91.0, -181.0], [0.0, 0.0]]).unwrap();

        assert_eq!(
            ring_of(geometry),
            vec![[200.0, 95.0], [-181.0, -91.0], [0.0, 0.0], [200.0, 95.0]]
        );
    }

    #[test]
    fn rejects_fewer_than_three_pairs() {
        let err = polygon_from_lat_lng(&[[1.0, 2.0], [3.0, 4.0]]).unwrap_err();
        assert_eq!(err, ValidationError::TooFewCoordinates(2));

        let empty: &[[f64; 2]] = &[];
        assert_eq!(
            polygon_from_lat_lng(empty).unwrap_err(),
            ValidationError::TooFewCoordinates(0)
        );
    }

    #[test]
    fn reports_the_malformed_pair() {
        let coordinates = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0, 7.0]];
        let err = polygon_from_lat_lng(&coordinates).unwrap_err();
        assert_eq!(err, ValidationError::InvalidCoordinate(vec![1.0, 2.0, 3.0]));

        let coordinates = vec![vec![4.0, 5.0], vec![6.0, 7.0], vec![8.0]];
        let err = polygon_from_lat_lng(&coordinates).unwrap_err();
        assert_eq!(err, ValidationError::InvalidCoordinate(vec![8.0]));
    }
}
