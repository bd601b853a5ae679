use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

pub type Pt3 = Point3<f64>;
pub type Vec3 = Vector3<f64>;
pub type Mat4 = Matrix4<f64>;
pub type Quat = UnitQuaternion<f64>;

/// Plain-data vector for frontend/tool interchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vec3Data {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vec3> for Vec3Data {
    fn from(v: Vec3) -> Self {
        Vec3Data { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Vec3Data> for Vec3 {
    fn from(data: Vec3Data) -> Self {
        Vec3::new(data.x, data.y, data.z)
    }
}

impl From<Pt3> for Vec3Data {
    fn from(p: Pt3) -> Self {
        Vec3Data { x: p.x, y: p.y, z: p.z }
    }
}

impl From<Vec3Data> for Pt3 {
    fn from(data: Vec3Data) -> Self {
        Pt3::new(data.x, data.y, data.z)
    }
}

/// Plain-data quaternion (x, y, z, w ordering)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuatData {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl From<Quat> for QuatData {
    fn from(q: Quat) -> Self {
        QuatData {
            x: q.coords.x,
            y: q.coords.y,
            z: q.coords.z,
            w: q.coords.w,
        }
    }
}

impl From<QuatData> for Quat {
    fn from(data: QuatData) -> Self {
        Quat::from_quaternion(nalgebra::Quaternion::new(data.w, data.x, data.y, data.z))
    }
}

/// Serializable scale/rotate/translate triple, mirror of `rig::Srt`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrtData {
    pub scale: Vec3Data,
    pub rotation: QuatData,
    pub translation: Vec3Data,
}
