#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_reflect as reflect;
pub use vc_serial as serial;
