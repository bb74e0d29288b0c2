use crate::document::OmeDocument;
use crate::error::Result;
use crate::iter::SeriesIter;
use crate::source::{OmeXmlFile, OmeXmlSource};
use log::debug;
use std::path::Path;

/// Entry point for reading per-series OME metadata
///
/// Wraps an [`OmeXmlSource`] and turns the OME-XML it produces into a lazy
/// series iterator. Every call to [`read`](MetadataSource::read) yields a
/// fresh, independent iterator; nothing is shared between calls.
///
/// # Example
///
/// ```
/// use omemeta_core::{MetadataSource, OmeXmlSource, Result};
/// use std::path::Path;
///
/// // A source bridging an external extraction library would resolve the
/// // path through that library; here it returns a canned document.
/// struct Canned;
///
/// impl OmeXmlSource for Canned {
///     fn ome_xml(&self, _path: &Path) -> Result<String> {
///         Ok(r#"<OME>
///             <Image ID="Image:0" Name="decon.dv">
///               <Pixels ID="Pixels:0" DimensionOrder="XYZCT" Type="uint16"
///                       SizeX="960" SizeY="960" SizeZ="30" SizeC="1" SizeT="1"/>
///             </Image>
///           </OME>"#
///             .to_string())
///     }
/// }
///
/// let reader = MetadataSource::new(Canned);
/// let mut series = reader.read("decon.dv").unwrap();
/// assert_eq!(series.len(), 1);
///
/// let first = series.next().unwrap().unwrap();
/// assert_eq!(first.id, "Image:0");
/// assert_eq!(first.name.as_deref(), Some("decon.dv"));
/// assert_eq!(first.sizex, 960);
/// assert_eq!(first.sizey, 960);
/// ```
#[derive(Debug, Clone)]
pub struct MetadataSource<S: OmeXmlSource> {
    source: S,
}

impl<S: OmeXmlSource> MetadataSource<S> {
    /// Creates a metadata source over an extraction collaborator
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads per-series metadata for the file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`crate::OmeMetaError::MetadataUnavailable`] when the path
    /// does not resolve, the collaborator fails, or the resolved text is
    /// not a well-formed OME document.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<SeriesIter> {
        let path = path.as_ref();
        let xml = self.source.ome_xml(path)?;
        let doc = OmeDocument::parse(&xml)?;
        debug!(
            "{}: parsed OME document with {} series",
            path.display(),
            doc.series_count()
        );
        Ok(SeriesIter::new(xml, doc))
    }
}

/// Reads per-series metadata from a file that already contains OME-XML
///
/// Convenience over `MetadataSource::new(OmeXmlFile).read(path)`.
pub fn read<P: AsRef<Path>>(path: P) -> Result<SeriesIter> {
    MetadataSource::new(OmeXmlFile).read(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OmeMetaError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<OME xmlns="http://www.openmicroscopy.org/Schemas/OME/2016-06">
  <Image ID="Image:0" Name="series_0">
    <Pixels ID="Pixels:0" DimensionOrder="XYCZT" Type="uint16"
            SizeX="512" SizeY="512" SizeZ="1" SizeC="1" SizeT="1"
            PhysicalSizeX="0.5" PhysicalSizeY="0.5"/>
  </Image>
  <Image ID="Image:1" Name="series_1">
    <Pixels ID="Pixels:1" DimensionOrder="XYCZT" Type="uint16"
            SizeX="256" SizeY="256" SizeZ="1" SizeC="1" SizeT="1"
            PhysicalSizeX="1.0" PhysicalSizeY="1.0"/>
  </Image>
</OME>"#;

    fn fixture_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", FIXTURE).unwrap();
        file
    }

    #[test]
    fn test_read_fixture_file() {
        let file = fixture_file();
        let series: Vec<_> = read(file.path()).unwrap().collect::<Result<_>>().unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name.as_deref(), Some("series_0"));
        assert_eq!((series[0].sizex, series[0].sizey), (512, 512));
        assert_eq!(series[0].voxel_size_x, Some(0.5));
        assert_eq!(series[1].name.as_deref(), Some("series_1"));
        assert_eq!((series[1].sizex, series[1].sizey), (256, 256));
        assert_eq!(series[1].voxel_size_y, Some(1.0));
    }

    #[test]
    fn test_read_preserves_backing_xml() {
        let file = fixture_file();
        let iter = read(file.path()).unwrap();
        assert_eq!(iter.xml(), FIXTURE);
    }

    #[test]
    fn test_reread_yields_independent_iterators() {
        let file = fixture_file();

        let mut first = read(file.path()).unwrap();
        while first.next().is_some() {}
        assert_eq!(first.remaining(), 0);

        // a fresh call is unaffected by the exhausted iterator
        let second = read(file.path()).unwrap();
        assert_eq!(second.remaining(), 2);
        assert_eq!(second.count(), 2);
    }

    #[test]
    fn test_read_nonexistent_path() {
        let err = read("/no/such/file.ome.xml").unwrap_err();
        assert!(matches!(err, OmeMetaError::MetadataUnavailable(_)));
    }

    #[test]
    fn test_read_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not xml at all").unwrap();

        let err = read(file.path()).unwrap_err();
        assert!(matches!(err, OmeMetaError::MetadataUnavailable(_)));
    }
}
