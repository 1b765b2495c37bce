pub mod dynamodb;
pub mod parsers;
pub mod s3_adapter;
pub mod sns_adapter;
