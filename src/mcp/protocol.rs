//! MCP protocol response helpers.
//!
//! Every tool answers with a single text content block. Reads carry
//! pretty-printed JSON; mutations carry a short message naming the record.

use rmcp::model::{CallToolResult, Content, ErrorData};
use serde::Serialize;

use crate::store::Record;

/// Response that serializes the inner value as pretty-printed JSON text.
///
/// # Example
///
/// ```ignore
/// let units: Vec<UnitSummary> = records.summaries::<Unit, _>(&All);
/// Response(units).into()
/// ```
pub struct Response<T>(pub T);

impl<T: Serialize> From<Response<T>> for Result<CallToolResult, ErrorData> {
    fn from(response: Response<T>) -> Self {
        Ok(CallToolResult::success(vec![Content::text(pretty(
            &response.0,
        )?)]))
    }
}

/// `Created <label>: <record>` for a freshly inserted record.
pub fn created<T: Record>(record: &T) -> Result<CallToolResult, ErrorData> {
    message(format!("Created {}: {}", T::LABEL, pretty(record)?))
}

/// `Updated <label>: <record>` with the merged record.
pub fn updated<T: Record>(record: &T) -> Result<CallToolResult, ErrorData> {
    message(format!("Updated {}: {}", T::LABEL, pretty(record)?))
}

/// `Deleted <label> with ID: <id>`.
pub fn deleted<T: Record>(id: &str) -> Result<CallToolResult, ErrorData> {
    message(format!("Deleted {} with ID: {}", T::LABEL, id))
}

fn message(text: String) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, ErrorData> {
    serde_json::to_string_pretty(value).map_err(|e| ErrorData::internal_error(e.to_string(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Convention, LessonPhase};

    fn text(result: Result<CallToolResult, ErrorData>) -> String {
        let result = result.unwrap();
        result.content[0].raw.as_text().unwrap().text.clone()
    }

    #[test]
    fn test_response_is_pretty_json() {
        let out = text(Response(vec![1, 2]).into());
        assert_eq!(out, "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_created_message() {
        let convention = Convention {
            id: "c1".to_string(),
            rule: "Use snake_case".to_string(),
            description: "Everywhere".to_string(),
            extra: Default::default(),
        };
        let out = text(created(&convention));
        assert!(out.starts_with("Created convention: {\n"));
        assert!(out.contains("\"rule\": \"Use snake_case\""));
    }

    #[test]
    fn test_deleted_message() {
        assert_eq!(
            text(deleted::<LessonPhase>("p1")),
            "Deleted lesson phase with ID: p1"
        );
    }
}
