use crate::Error;
use const_format::concatcp;
use std::path::Path;
use std::path::PathBuf;

/// Checkout of the Microsoft 365 documentation repository.
pub const DOCS: &str = "microsoft-365-docs";
/// Directory holding the Advanced Hunting schema pages.
pub const SCHEMAS: &str = concatcp!(DOCS, "/microsoft-365/security/defender");

/// Advanced Hunting tables, in creation order.
pub const ADVANCED_HUNTING: [&str; 35] = [
    "AADSignInEventsBeta",
    "AADSpnSignInEventsBeta",
    "AlertEvidence",
    "AlertInfo",
    "BehaviorEntities",
    "BehaviorInfo",
    "CloudAppEvents",
    "DeviceEvents",
    "DeviceFileCertificateInfo",
    "DeviceFileEvents",
    "DeviceImageLoadEvents",
    "DeviceInfo",
    "DeviceLogonEvents",
    "DeviceNetworkEvents",
    "DeviceNetworkInfo",
    "DeviceProcessEvents",
    "DeviceRegistryEvents",
    "DeviceTvmHardwareFirmware",
    "DeviceTvmInfoGathering",
    "DeviceTvmInfoGatheringKB",
    "DeviceTvmSecureConfigurationAssessment",
    "DeviceTvmSecureConfigurationAssessmentKB",
    "DeviceTvmSoftwareEvidenceBeta",
    "DeviceTvmSoftwareInventory",
    "DeviceTvmSoftwareVulnerabilities",
    "DeviceTvmSoftwareVulnerabilitiesKB",
    "EmailAttachmentInfo",
    "EmailEvents",
    "EmailPostDeliveryEvents",
    "EmailUrlInfo",
    "IdentityDirectoryEvents",
    "IdentityInfo",
    "IdentityLogonEvents",
    "IdentityQueryEvents",
    "UrlClickEvents",
];

/// Ordered schema names plus the directory their pages live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    root: PathBuf,
    schemas: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(SCHEMAS, ADVANCED_HUNTING)
    }
}

impl Catalog {
    pub fn new<P, I, S>(root: P, schemas: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            schemas: schemas.into_iter().map(Into::into).collect(),
        }
    }

    /// One schema name per line. Blank lines and `#` comments are ignored.
    pub fn from_file<P>(root: P, path: &Path) -> crate::Result<Self>
    where
        P: Into<PathBuf>,
    {
        let names = read(path)?
            .into_iter()
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<String>>();
        Ok(Self::new(root, names))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }
    pub fn len(&self) -> usize {
        self.schemas.len()
    }
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// `<root>/advanced-hunting-<schema>-table.md`, schema lowercased.
    pub fn path(&self, schema: &str) -> PathBuf {
        self.root.join(format!(
            "advanced-hunting-{}-table.md",
            schema.to_lowercase()
        ))
    }
}

/// Whole file as trimmed lines. The file is closed before returning.
pub fn read(path: &Path) -> crate::Result<Vec<String>> {
    std::fs::read_to_string(path)
        .map(|text| text.lines().map(str::trim).map(String::from).collect())
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}
