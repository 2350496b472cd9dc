use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Storage backend an attachment is kept in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttachmentType {
    Local,
    UpOss,
    QiNiuOss,
    SmMs,
    AliOss,
    BaiduBos,
    TencentCos,
    HuaweiObs,
    MinIo,
}

impl AttachmentType {
    pub const ALL: [AttachmentType; 9] = [
        AttachmentType::Local,
        AttachmentType::UpOss,
        AttachmentType::QiNiuOss,
        AttachmentType::SmMs,
        AttachmentType::AliOss,
        AttachmentType::BaiduBos,
        AttachmentType::TencentCos,
        AttachmentType::HuaweiObs,
        AttachmentType::MinIo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentType::Local => "LOCAL",
            AttachmentType::UpOss => "UPOSS",
            AttachmentType::QiNiuOss => "QINIUOSS",
            AttachmentType::SmMs => "SMMS",
            AttachmentType::AliOss => "ALIOSS",
            AttachmentType::BaiduBos => "BAIDUBOS",
            AttachmentType::TencentCos => "TENCENTCOS",
            AttachmentType::HuaweiObs => "HUAWEIOBS",
            AttachmentType::MinIo => "MINIO",
        }
    }
}

impl FromStr for AttachmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownAttachmentType(s.to_string()))
    }
}

impl std::fmt::Display for AttachmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
