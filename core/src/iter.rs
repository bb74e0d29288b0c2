use crate::document::OmeDocument;
use crate::error::Result;
use crate::extraction::extract_series;
use crate::types::SeriesMetadata;
use std::collections::BTreeMap;

/// Lazy, single-pass iterator over per-series metadata
///
/// Produced by [`crate::read`] or [`crate::MetadataSource::read`]. Each
/// call to `next` maps exactly one raw series node onto a typed
/// [`SeriesMetadata`] record; no record is materialized ahead of demand. A
/// malformed series yields `Err` for that item and the iterator then moves
/// on to the following series, so the caller decides between skipping
/// (`filter_map(Result::ok)`) and aborting (`collect::<Result<Vec<_>>>()`).
///
/// The iterator owns the parsed document and the OME-XML text it came
/// from; both are dropped with it. Exhausted iterators are not
/// restartable; call `read` again for a fresh pass.
#[derive(Debug)]
pub struct SeriesIter {
    xml: String,
    doc: OmeDocument,
    cursor: usize,
}

impl SeriesIter {
    pub(crate) fn new(xml: String, doc: OmeDocument) -> Self {
        Self {
            xml,
            doc,
            cursor: 0,
        }
    }

    /// Returns the total number of series in the document
    ///
    /// Unaffected by how far the iterator has advanced; see [`remaining`]
    /// for what is left to consume.
    ///
    /// [`remaining`]: SeriesIter::remaining
    pub fn len(&self) -> usize {
        self.doc.series_count()
    }

    /// Returns `true` if the document has no series at all
    pub fn is_empty(&self) -> bool {
        self.doc.series_count() == 0
    }

    /// Returns the number of series not yet consumed
    pub fn remaining(&self) -> usize {
        self.doc.series_count() - self.cursor
    }

    /// Returns the OME-XML text backing this iterator
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Materializes the remaining series into a map keyed by series id
    ///
    /// The snapshot is eager: every un-consumed series is extracted now, in
    /// order, and the iterator is consumed. Already-consumed series are not
    /// part of the snapshot.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed remaining series; a partial map is
    /// never returned.
    pub fn into_map(mut self) -> Result<BTreeMap<String, SeriesMetadata>> {
        let mut map = BTreeMap::new();
        for item in &mut self {
            let series = item?;
            map.insert(series.id.clone(), series);
        }
        Ok(map)
    }
}

impl Iterator for SeriesIter {
    type Item = Result<SeriesMetadata>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.doc.series().get(self.cursor)?;
        self.cursor += 1;
        Some(extract_series(raw))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OmeMetaError;

    const TWO_SERIES: &str = r#"<OME xmlns="http://www.openmicroscopy.org/Schemas/OME/2016-06">
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

    fn two_series_iter() -> SeriesIter {
        let doc = OmeDocument::parse(TWO_SERIES).unwrap();
        SeriesIter::new(TWO_SERIES.to_string(), doc)
    }

    #[test]
    fn test_full_iteration_in_order() {
        let series: Vec<_> = two_series_iter().collect::<Result<_>>().unwrap();
        assert_eq!(series.len(), 2);

        assert_eq!(series[0].id, "Image:0");
        assert_eq!((series[0].sizex, series[0].sizey), (512, 512));
        assert_eq!(series[0].voxel_size_x, Some(0.5));
        assert_eq!(series[0].voxel_size_y, Some(0.5));

        assert_eq!(series[1].id, "Image:1");
        assert_eq!((series[1].sizex, series[1].sizey), (256, 256));
        assert_eq!(series[1].voxel_size_x, Some(1.0));
        assert_eq!(series[1].voxel_size_y, Some(1.0));
    }

    #[test]
    fn test_len_and_remaining() {
        let mut iter = two_series_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.remaining(), 2);
        assert_eq!(iter.size_hint(), (2, Some(2)));

        iter.next().unwrap().unwrap();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.remaining(), 1);

        iter.next().unwrap().unwrap();
        assert!(iter.next().is_none());
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.remaining(), 0);
        // exhausted for good
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_snapshot_of_all_series() {
        let map = two_series_iter().into_map().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["Image:0"].sizex, 512);
        assert_eq!(map["Image:1"].sizex, 256);
    }

    #[test]
    fn test_snapshot_after_partial_consumption() {
        let mut iter = two_series_iter();
        let first = iter.next().unwrap().unwrap();
        assert_eq!(first.id, "Image:0");

        let map = iter.into_map().unwrap();
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("Image:0"));
        assert_eq!(map["Image:1"].sizey, 256);
    }

    #[test]
    fn test_snapshot_of_exhausted_iterator_is_empty() {
        let mut iter = two_series_iter();
        while iter.next().is_some() {}
        let map = iter.into_map().unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_malformed_series_yields_err_and_iteration_continues() {
        // second of three series has no SizeX
        let xml = r#"<OME>
          <Image ID="Image:0">
            <Pixels ID="Pixels:0" DimensionOrder="XYCZT" Type="uint8"
                    SizeX="8" SizeY="8" SizeZ="1" SizeC="1" SizeT="1"/>
          </Image>
          <Image ID="Image:1">
            <Pixels ID="Pixels:1" DimensionOrder="XYCZT" Type="uint8"
                    SizeY="8" SizeZ="1" SizeC="1" SizeT="1"/>
          </Image>
          <Image ID="Image:2">
            <Pixels ID="Pixels:2" DimensionOrder="XYCZT" Type="uint8"
                    SizeX="8" SizeY="8" SizeZ="1" SizeC="1" SizeT="1"/>
          </Image>
        </OME>"#;
        let doc = OmeDocument::parse(xml).unwrap();
        let mut iter = SeriesIter::new(xml.to_string(), doc);

        assert!(iter.next().unwrap().is_ok());
        let err = iter.next().unwrap().unwrap_err();
        assert!(matches!(err, OmeMetaError::SeriesFieldMissing(_)));
        let third = iter.next().unwrap().unwrap();
        assert_eq!(third.id, "Image:2");
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_snapshot_fails_fast_on_malformed_series() {
        let xml = r#"<OME>
          <Image ID="Image:0"/>
          <Image ID="Image:1">
            <Pixels ID="Pixels:1" DimensionOrder="XYCZT" Type="uint8"
                    SizeX="8" SizeY="8" SizeZ="1" SizeC="1" SizeT="1"/>
          </Image>
        </OME>"#;
        let doc = OmeDocument::parse(xml).unwrap();
        let iter = SeriesIter::new(xml.to_string(), doc);

        let err = iter.into_map().unwrap_err();
        assert!(matches!(err, OmeMetaError::SeriesFieldMissing(_)));
    }

    #[test]
    fn test_xml_accessor() {
        let iter = two_series_iter();
        assert_eq!(iter.xml(), TWO_SERIES);
    }

    #[test]
    fn test_empty_document_iterates_nothing() {
        let doc = OmeDocument::parse("<OME/>").unwrap();
        let mut iter = SeriesIter::new("<OME/>".to_string(), doc);
        assert!(iter.is_empty());
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
    }
}
