use crate::types::{ChannelMetadata, PlaneMetadata};

/// Metadata for a single series (one `Image` element) of an OME file
///
/// Fields mirror the OME schema's `Image`/`Pixels` attributes. Dimension
/// sizes are always present; physical sizes and timing information are
/// optional in the schema and carried as `Option` with the schema's default
/// units where a unit attribute is omitted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SeriesMetadata {
    /// Series identifier (`Image/@ID`)
    pub id: String,

    /// Human-readable series name
    pub name: Option<String>,

    /// Pixels element identifier (`Pixels/@ID`)
    pub pixel_id: String,

    /// Dimension storage order, e.g. "XYCZT"
    pub dimension_order: String,

    /// Pixel sample type, e.g. "uint16"
    pub pixel_type: String,

    /// Significant bits per sample
    pub significant_bits: Option<u16>,

    /// Whether channel samples are interleaved
    pub interleaved: Option<bool>,

    /// Whether samples are stored big-endian
    pub big_endian: Option<bool>,

    /// Pixel counts along each dimension
    pub sizex: u32,
    pub sizey: u32,
    pub sizez: u32,
    pub sizec: u32,
    pub sizet: u32,

    /// Physical size per voxel along X/Y/Z
    pub voxel_size_x: Option<f64>,
    pub voxel_size_y: Option<f64>,
    pub voxel_size_z: Option<f64>,

    /// Units for the physical voxel sizes
    pub voxel_unit_x: String,
    pub voxel_unit_y: String,
    pub voxel_unit_z: String,

    /// Time between consecutive timepoints
    pub time_increment: Option<f64>,

    /// Unit for the time increment
    pub time_unit: String,

    /// Per-channel metadata, in document order
    pub channels: Vec<ChannelMetadata>,

    /// Per-plane metadata, in document order
    pub planes: Vec<PlaneMetadata>,
}

impl SeriesMetadata {
    /// Computes the number of pixels in one plane (sizex * sizey)
    pub fn pixel_count(&self) -> u64 {
        self.sizex as u64 * self.sizey as u64
    }

    /// Checks if this series carries volumetric data (more than one Z slice)
    pub fn is_volumetric(&self) -> bool {
        self.sizez > 1
    }

    /// Checks if this series is a timelapse (more than one timepoint)
    pub fn is_timelapse(&self) -> bool {
        self.sizet > 1
    }
}
