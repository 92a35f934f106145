//! Message rendering: segmentation, section styling and terminal markup

pub mod block;
pub mod format;
pub mod markup;
pub mod plain;

pub use block::{render_message, split_sub_responses, BlockBody, MessageBlock, RESPONSE_DELIMITER};
pub use format::{format_response, FormattedResponse, Section, SectionStyle};
pub use plain::render_plain;
