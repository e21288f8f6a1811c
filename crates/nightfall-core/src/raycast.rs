//! Raycasting against tagged world objects.
//!
//! Interaction code never compares entity identities. It asks the
//! [`Raycaster`] for the nearest object of the kinds it cares about and then
//! switches on the returned [`ObjectKind`].

use hecs::{Entity, World};

use crate::components::{Collider, ObjectKind, Position, Vec3, WorldObject};

/// A ray from the camera. `direction` is expected to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// The nearest object a ray touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub kind: ObjectKind,
    pub distance: f32,
}

/// Nearest-hit query over the world's objects.
pub trait Raycaster {
    /// Nearest object whose kind passes `filter`, or `None`.
    fn nearest(&self, world: &World, ray: &Ray, filter: &dyn Fn(ObjectKind) -> bool) -> Option<RayHit>;
}

/// Analytic raycaster over [`Collider`] shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColliderRaycaster;

impl Raycaster for ColliderRaycaster {
    fn nearest(&self, world: &World, ray: &Ray, filter: &dyn Fn(ObjectKind) -> bool) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;
        for (entity, (obj, pos, collider)) in world
            .query::<(&WorldObject, &Position, &Collider)>()
            .iter()
        {
            if !filter(obj.kind) {
                continue;
            }
            let Some(distance) = intersect(ray, pos.0, collider) else {
                continue;
            };
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(RayHit {
                    entity,
                    kind: obj.kind,
                    distance,
                });
            }
        }
        best
    }
}

/// Entry distance of `ray` into `collider` placed at `at`. A ray starting
/// inside a shape hits at zero.
pub fn intersect(ray: &Ray, at: Vec3, collider: &Collider) -> Option<f32> {
    match *collider {
        Collider::Sphere { radius } => hit_sphere(ray, at, radius),
        Collider::Box(bb) => hit_box(ray, at - bb.half, at + bb.half),
        Collider::Cylinder { radius, height } => hit_cylinder(ray, at, radius, height),
        Collider::Disc { radius } => hit_disc(ray, at, radius),
    }
}

fn hit_sphere(ray: &Ray, centre: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - centre;
    let b = oc.dot(&ray.direction);
    let c = oc.dot(&oc) - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

fn hit_box(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = 0.0f32;
    let mut t_far = f32::INFINITY;
    let axes = [
        (ray.origin.x, ray.direction.x, min.x, max.x),
        (ray.origin.y, ray.direction.y, min.y, max.y),
        (ray.origin.z, ray.direction.z, min.z, max.z),
    ];
    for (o, d, lo, hi) in axes {
        if d.abs() < f32::EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let (a, b) = ((lo - o) / d, (hi - o) / d);
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        t_near = t_near.max(a);
        t_far = t_far.min(b);
        if t_near > t_far {
            return None;
        }
    }
    Some(t_near)
}

fn hit_cylinder(ray: &Ray, base: Vec3, radius: f32, height: f32) -> Option<f32> {
    let within_height = |t: f32| {
        let y = ray.at(t).y;
        y >= base.y && y <= base.y + height
    };

    let ox = ray.origin.x - base.x;
    let oz = ray.origin.z - base.z;
    let (dx, dz) = (ray.direction.x, ray.direction.z);
    let a = dx * dx + dz * dz;
    let c = ox * ox + oz * oz - radius * radius;

    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    if c <= 0.0 && within_height(0.0) {
        return Some(0.0);
    }

    // Side wall
    if a > f32::EPSILON {
        let b = ox * dx + oz * dz;
        let disc = b * b - a * c;
        if disc >= 0.0 {
            let root = disc.sqrt();
            for t in [(-b - root) / a, (-b + root) / a] {
                if t >= 0.0 && within_height(t) {
                    consider(t);
                }
            }
        }
    }

    // End caps
    if ray.direction.y.abs() > f32::EPSILON {
        for cap_y in [base.y, base.y + height] {
            let t = (cap_y - ray.origin.y) / ray.direction.y;
            let p = ray.at(t);
            let (px, pz) = (p.x - base.x, p.z - base.z);
            if px * px + pz * pz <= radius * radius {
                consider(t);
            }
        }
    }

    best
}

fn hit_disc(ray: &Ray, centre: Vec3, radius: f32) -> Option<f32> {
    if ray.direction.y.abs() < f32::EPSILON {
        return None;
    }
    let t = (centre.y - ray.origin.y) / ray.direction.y;
    if t < 0.0 {
        return None;
    }
    let p = ray.at(t);
    let (px, pz) = (p.x - centre.x, p.z - centre.z);
    (px * px + pz * pz <= radius * radius).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::BoundingBox;

    fn forward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::FORWARD)
    }

    #[test]
    fn test_sphere_hit_distance() {
        let t = intersect(&forward_ray(), Vec3::new(0.0, 1.6, -5.0), &Collider::Sphere { radius: 1.0 });
        assert!((t.unwrap() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_behind_is_missed() {
        let t = intersect(&forward_ray(), Vec3::new(0.0, 1.6, 5.0), &Collider::Sphere { radius: 1.0 });
        assert_eq!(t, None);
    }

    #[test]
    fn test_box_hit() {
        let bb = BoundingBox::from_size(4.0, 2.5, 8.0);
        let t = intersect(&forward_ray(), Vec3::new(0.0, 1.25, -10.0), &Collider::Box(bb));
        assert!((t.unwrap() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_cylinder_side_hit() {
        let t = intersect(
            &forward_ray(),
            Vec3::new(0.0, 0.0, -3.0),
            &Collider::Cylinder { radius: 0.9, height: 7.0 },
        );
        assert!((t.unwrap() - 2.1).abs() < 1e-4);
    }

    #[test]
    fn test_cylinder_above_is_missed() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::FORWARD);
        let t = intersect(&ray, Vec3::new(0.0, 0.0, -3.0), &Collider::Cylinder { radius: 0.9, height: 7.0 });
        assert_eq!(t, None);
    }

    #[test]
    fn test_disc_looking_down() {
        let ray = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, -1.0, -1.0));
        let t = intersect(&ray, Vec3::new(0.0, -0.5, 0.0), &Collider::Disc { radius: 30.0 });
        // drop of 2.1 along a 45 degree ray
        assert!((t.unwrap() - 2.1 * 2f32.sqrt()).abs() < 1e-4);
        assert_eq!(intersect(&forward_ray(), Vec3::new(0.0, -0.5, 0.0), &Collider::Disc { radius: 30.0 }), None);
    }

    #[test]
    fn test_nearest_respects_filter_and_distance() {
        let mut world = World::new();
        let near = world.spawn((
            WorldObject::new(ObjectKind::Tree),
            Position(Vec3::new(0.0, 0.0, -2.0)),
            Collider::Cylinder { radius: 0.5, height: 7.0 },
        ));
        world.spawn((
            WorldObject::new(ObjectKind::Tree),
            Position(Vec3::new(0.0, 0.0, -6.0)),
            Collider::Cylinder { radius: 0.5, height: 7.0 },
        ));
        world.spawn((
            WorldObject::new(ObjectKind::Wreck),
            Position(Vec3::new(0.0, 1.6, -1.0)),
            Collider::Sphere { radius: 0.2 },
        ));

        let hit = ColliderRaycaster
            .nearest(&world, &forward_ray(), &|k| k.is_harvestable())
            .unwrap();
        assert_eq!(hit.entity, near);
        assert_eq!(hit.kind, ObjectKind::Tree);
        assert!((hit.distance - 1.5).abs() < 1e-4);

        let any = ColliderRaycaster.nearest(&world, &forward_ray(), &|_| true).unwrap();
        assert_eq!(any.kind, ObjectKind::Wreck);
    }
}
