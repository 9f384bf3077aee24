//! 工具入参 Schema：声明式字段规格与统一校验
//!
//! 每个工具用 {字段: 类型/缺省值/说明} 声明入参，由唯一的 validate 例程统一处理：
//! 先填缺省值，再做类型与枚举检查，任何一步失败即 InvalidInput，绝不发起后端调用。
//! 同时提供 JSON Schema 渲染（写入工具清单）与 schemars 生成的调用信封
//! `{"tool": "...", "args": {...}}` Schema（宿主可拼入 system prompt）。

use schemars::{schema_for, JsonSchema};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

use crate::error::ToolError;

/// 字段类型：字符串 / 整数 / 数值 / 字符串枚举
#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Enum(&'static [&'static str]),
}

/// 单个入参字段的规格；default 为 None 表示必填
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub description: &'static str,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            default: None,
            description,
        }
    }

    pub fn optional(
        name: &'static str,
        kind: FieldKind,
        default: Value,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
            description,
        }
    }
}

/// 工具入参 Schema：字段规格列表
#[derive(Debug, Clone, Default)]
pub struct ToolSchema {
    pub fields: Vec<FieldSpec>,
}

impl ToolSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// 统一校验：先填缺省值再检查类型，返回规整后的入参对象
    ///
    /// - 缺失且无缺省值的字段 → InvalidInput
    /// - 类型不符 / 枚举值非法 → InvalidInput
    /// - 未声明的多余字段被丢弃（与 zod 的 strip 行为一致）
    pub fn validate(&self, args: &Value) -> Result<Value, ToolError> {
        let empty = Map::new();
        let input = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(ToolError::InvalidInput(
                    "arguments must be a JSON object".to_string(),
                ))
            }
        };

        let mut out = Map::new();
        for field in &self.fields {
            let value = match input.get(field.name) {
                Some(v) if !v.is_null() => v.clone(),
                _ => match &field.default {
                    Some(d) => d.clone(),
                    None => {
                        return Err(ToolError::InvalidInput(format!(
                            "missing required field '{}'",
                            field.name
                        )))
                    }
                },
            };

            Self::check_kind(field, &value)?;
            out.insert(field.name.to_string(), value);
        }

        Ok(Value::Object(out))
    }

    fn check_kind(field: &FieldSpec, value: &Value) -> Result<(), ToolError> {
        match &field.kind {
            FieldKind::String => {
                if !value.is_string() {
                    return Err(ToolError::InvalidInput(format!(
                        "field '{}' must be a string",
                        field.name
                    )));
                }
            }
            FieldKind::Integer => {
                let ok = value.is_i64()
                    || value.is_u64()
                    || value.as_f64().is_some_and(|f| f.fract() == 0.0);
                if !ok {
                    return Err(ToolError::InvalidInput(format!(
                        "field '{}' must be an integer",
                        field.name
                    )));
                }
            }
            FieldKind::Number => {
                if !value.is_number() {
                    return Err(ToolError::InvalidInput(format!(
                        "field '{}' must be a number",
                        field.name
                    )));
                }
            }
            FieldKind::Enum(variants) => {
                let ok = value.as_str().is_some_and(|s| variants.contains(&s));
                if !ok {
                    return Err(ToolError::InvalidInput(format!(
                        "field '{}' must be one of {:?}",
                        field.name, variants
                    )));
                }
            }
        }
        Ok(())
    }

    /// 渲染为 JSON Schema 对象（工具清单中对宿主公布的入参格式）
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let type_name = match &field.kind {
                FieldKind::String | FieldKind::Enum(_) => "string",
                FieldKind::Integer => "integer",
                FieldKind::Number => "number",
            };
            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(type_name));
            prop.insert("description".to_string(), json!(field.description));
            if let FieldKind::Enum(variants) = &field.kind {
                prop.insert("enum".to_string(), json!(variants));
            }
            match &field.default {
                Some(d) => {
                    prop.insert("default".to_string(), d.clone());
                }
                None => required.push(json!(field.name)),
            }
            properties.insert(field.name.to_string(), Value::Object(prop));
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// 工具调用请求格式：宿主发来的 `{"tool": "...", "args": {...}}` 信封（仅用于 Schema 生成）
#[allow(dead_code)]
#[derive(JsonSchema)]
struct ToolCallFormat {
    /// 工具名，如 check-overdue-invoices、reconcile-payments
    pub tool: String,
    /// 工具参数，依工具不同而不同（connectionId、invoiceId、tone 等）
    pub args: HashMap<String, String>,
}

/// 返回工具调用信封的 JSON Schema 字符串，可拼入宿主的 system prompt
pub fn tool_call_schema_json() -> String {
    let schema = schema_for!(ToolCallFormat);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_schema() -> ToolSchema {
        ToolSchema::new(vec![
            FieldSpec::optional(
                "connectionId",
                FieldKind::String,
                json!("demo"),
                "Connection ID",
            ),
            FieldSpec::required("invoiceId", FieldKind::String, "Invoice ID"),
            FieldSpec::optional(
                "tone",
                FieldKind::Enum(&["friendly", "firm", "final-notice"]),
                json!("friendly"),
                "Email tone",
            ),
        ])
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let out = demo_schema()
            .validate(&json!({ "invoiceId": "inv_001" }))
            .unwrap();
        assert_eq!(out["connectionId"], "demo");
        assert_eq!(out["tone"], "friendly");
        assert_eq!(out["invoiceId"], "inv_001");
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let err = demo_schema().validate(&json!({})).unwrap_err();
        assert!(err.to_string().contains("invoiceId"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_enum_variant_checked() {
        let err = demo_schema()
            .validate(&json!({ "invoiceId": "inv_001", "tone": "angry" }))
            .unwrap_err();
        assert!(err.to_string().contains("tone"));
    }

    #[test]
    fn test_integer_accepts_whole_float_only() {
        let schema = ToolSchema::new(vec![FieldSpec::optional(
            "minDaysOverdue",
            FieldKind::Integer,
            json!(0),
            "Minimum days overdue",
        )]);
        assert!(schema.validate(&json!({ "minDaysOverdue": 14.0 })).is_ok());
        assert!(schema.validate(&json!({ "minDaysOverdue": 14.5 })).is_err());
        assert!(schema.validate(&json!({ "minDaysOverdue": "14" })).is_err());
    }

    #[test]
    fn test_unknown_fields_stripped() {
        let out = demo_schema()
            .validate(&json!({ "invoiceId": "inv_001", "extra": true }))
            .unwrap();
        assert!(out.get("extra").is_none());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let schema = demo_schema();
        let args = json!({ "invoiceId": "inv_002" });
        assert_eq!(
            schema.validate(&args).unwrap(),
            schema.validate(&args).unwrap()
        );
    }

    #[test]
    fn test_json_schema_rendering() {
        let rendered = demo_schema().to_json_schema();
        assert_eq!(rendered["properties"]["tone"]["enum"][0], "friendly");
        assert_eq!(rendered["required"], json!(["invoiceId"]));
        assert_eq!(rendered["properties"]["connectionId"]["default"], "demo");
    }

    #[test]
    fn test_call_envelope_schema_generated() {
        let schema = tool_call_schema_json();
        assert!(schema.contains("\"tool\""));
        assert!(schema.contains("\"args\""));
    }
}
