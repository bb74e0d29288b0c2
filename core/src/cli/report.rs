use crate::types::SeriesMetadata;
use std::fmt;

/// Text report formatter for a single series
pub struct TextReport<'a> {
    series: &'a SeriesMetadata,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(series: &'a SeriesMetadata) -> Self {
        Self { series }
    }

    fn format_voxel(size: Option<f64>, unit: &str) -> String {
        match size {
            Some(v) => format!("{} {}", v, unit),
            None => "unknown".to_string(),
        }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Series {}", self.series.id)?;
        writeln!(f, "==================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Name:           {}",
            self.series.name.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "Pixel Type:     {}", self.series.pixel_type)?;
        writeln!(f, "Dim Order:      {}", self.series.dimension_order)?;
        writeln!(
            f,
            "Size:           {} x {} (z={}, c={}, t={})",
            self.series.sizex, self.series.sizey, self.series.sizez, self.series.sizec,
            self.series.sizet
        )?;
        writeln!(
            f,
            "Voxel X:        {}",
            Self::format_voxel(self.series.voxel_size_x, &self.series.voxel_unit_x)
        )?;
        writeln!(
            f,
            "Voxel Y:        {}",
            Self::format_voxel(self.series.voxel_size_y, &self.series.voxel_unit_y)
        )?;
        writeln!(
            f,
            "Voxel Z:        {}",
            Self::format_voxel(self.series.voxel_size_z, &self.series.voxel_unit_z)
        )?;
        writeln!(f, "Channels:       {}", self.series.channels.len())?;
        writeln!(f, "Planes:         {}", self.series.planes.len())?;
        writeln!(f)?;

        // Additional derived information
        writeln!(f, "Derived Properties")?;
        writeln!(f, "------------------")?;
        writeln!(f, "Plane Pixels:   {}", self.series.pixel_count())?;
        writeln!(f, "Volumetric:     {}", self.series.is_volumetric())?;
        writeln!(f, "Timelapse:      {}", self.series.is_timelapse())?;

        Ok(())
    }
}
