//! Ray picking against bounding spheres.

use bevy::prelude::*;

/// Distance along a ray to its first intersection with a sphere.
///
/// `direction` must be normalized. Returns `None` when the sphere is missed
/// or lies entirely behind the ray origin. From inside the sphere the exit
/// point is returned.
pub fn ray_sphere_distance(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    if far < 0.0 {
        return None;
    }
    Some(if near >= 0.0 { near } else { far })
}

/// Find the closest candidate hit by a ray.
///
/// Candidates are `(id, center, radius)` triples.
pub fn nearest_hit<T>(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (T, Vec3, f32)>,
) -> Option<(T, f32)> {
    let direction = *ray.direction;
    candidates
        .into_iter()
        .filter_map(|(id, center, radius)| {
            ray_sphere_distance(ray.origin, direction, center, radius).map(|t| (id, t))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ray_down_z() -> Ray3d {
        Ray3d::new(Vec3::new(0.0, 0.0, 10.0), Dir3::NEG_Z)
    }

    #[test]
    fn test_hit_in_front() {
        let t = ray_sphere_distance(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert_relative_eq!(t.unwrap(), 9.0, epsilon = 1e-5);
    }

    #[test]
    fn test_miss_to_the_side() {
        let t = ray_sphere_distance(Vec3::new(3.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let t = ray_sphere_distance(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::ZERO, 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_origin_inside_sphere_hits_exit() {
        let t = ray_sphere_distance(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
        assert_relative_eq!(t.unwrap(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_nearest_hit_prefers_closest() {
        let candidates = [
            ("earth", Vec3::ZERO, 1.0),
            ("asteroid", Vec3::new(0.0, 0.0, 4.0), 0.5),
            ("moon", Vec3::new(3.84, 0.0, 0.0), 0.27),
        ];
        let (id, t) = nearest_hit(ray_down_z(), candidates).unwrap();
        assert_eq!(id, "asteroid");
        assert_relative_eq!(t, 5.5, epsilon = 1e-5);
    }

    #[test]
    fn test_nearest_hit_empty() {
        let candidates = [("moon", Vec3::new(3.84, 0.0, 0.0), 0.27)];
        assert!(nearest_hit(ray_down_z(), candidates).is_none());
    }
}
