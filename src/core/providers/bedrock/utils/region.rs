//! AWS Region Management for Bedrock

use crate::core::providers::unified_provider::ProviderError;

/// All AWS regions that offer the Bedrock runtime
pub const AWS_REGIONS: &[&str] = &[
    // US regions
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    // EU regions
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    // Asia Pacific regions
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    // Other regions
    "ca-central-1",
    "sa-east-1",
    "us-gov-west-1",
    "us-gov-east-1",
];

/// Validate if a region is supported by Bedrock
pub fn validate_region(region: &str) -> Result<(), ProviderError> {
    if AWS_REGIONS.contains(&region) {
        Ok(())
    } else {
        Err(ProviderError::configuration(
            "bedrock",
            format!(
                "Invalid AWS region: {}. Supported regions: {:?}",
                region, AWS_REGIONS
            ),
        ))
    }
}
