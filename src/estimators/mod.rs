pub mod approaches;
pub mod entropy;
pub mod mutual_information;
pub mod traits;
pub mod utils;

pub use traits::{DistributionEntropy, GlobalValue};
