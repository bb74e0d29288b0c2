/// Metadata for a single plane of a series (`Pixels/Plane`)
///
/// A plane is one 2D slice at a fixed (channel, timepoint, Z) index. Stage
/// positions default to the "reference frame" unit when the source document
/// omits the unit attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct PlaneMetadata {
    /// Channel index of this plane (`@TheC`)
    pub c: u32,

    /// Timepoint index of this plane (`@TheT`)
    pub t: u32,

    /// Z-section index of this plane (`@TheZ`)
    pub z: u32,

    /// Time offset from the start of the acquisition (`@DeltaT`)
    pub time_interval: Option<f64>,
    pub time_unit: String,

    /// Exposure time for this plane
    pub exposure_time: Option<f64>,
    pub exposure_time_unit: String,

    /// Stage position at acquisition
    pub stage_x: Option<f64>,
    pub stage_x_unit: String,
    pub stage_y: Option<f64>,
    pub stage_y_unit: String,
    pub stage_z: Option<f64>,
    pub stage_z_unit: String,
}

impl PlaneMetadata {
    /// Returns the (c, t, z) index of this plane
    pub fn index(&self) -> (u32, u32, u32) {
        (self.c, self.t, self.z)
    }
}
