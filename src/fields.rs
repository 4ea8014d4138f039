//! The fixed list of metadata fields to collect.

/// Metadata service base path for field requests.
pub const META_DATA_PATH: &str = "/latest/meta-data/";

/// One metadata field: a relative path on the metadata service and the
/// artifact label its raw response is recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataField {
    /// Path relative to [`META_DATA_PATH`].
    pub path: &'static str,
    /// Artifact label for the recorded response.
    pub artifact: &'static str,
}

impl MetadataField {
    /// Full request URL for this field against the given base URL.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}{}", base_url, META_DATA_PATH, self.path)
    }
}

/// The fields collected on every run, in output order. None of these carry
/// sensitive information, so responses are recorded unmasked.
pub const METADATA_FIELDS: &[MetadataField] = &[
    MetadataField {
        path: "hostname",
        artifact: "aws_metadata_hostname.txt",
    },
    MetadataField {
        path: "instance-id",
        artifact: "aws_metadata_instance-id.txt",
    },
    MetadataField {
        path: "instance-life-cycle",
        artifact: "aws_metadata_instance-life-cycle.txt",
    },
    MetadataField {
        path: "instance-type",
        artifact: "aws_metadata_instance-type.txt",
    },
    MetadataField {
        path: "placement/availability-zone-id",
        artifact: "aws_metadata_availability-zone-id.txt",
    },
];
