use anyhow::{Context, Result, anyhow, bail};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

/// Presentation data of one parameter field, read from a JSON schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

type Object = Map<String, Value>;

/// Field specs of the `params` object of the variant tagged `kind_key` in
/// an adjacently tagged (`type` / `params`) enum schema.
///
/// Variants without params yield an empty list; fields whose JSON type is
/// not a scalar are skipped.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let branches = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(Value::as_array)
        .context("missing oneOf/anyOf")?;

    for branch in branches {
        let branch = branch.as_object().context("branch is not an object")?;
        let Some(props) = branch.get("properties").and_then(Value::as_object) else {
            continue;
        };
        if discriminant_matches(props, kind_key) {
            return params_specs(root_obj, props);
        }
    }

    bail!("no branch found for type={kind_key}");
}

fn params_specs(root_obj: &Object, props: &Object) -> Result<Vec<FieldSpec>> {
    let Some(params) = props
        .get("params")
        .and_then(Value::as_object)
        .and_then(|params| resolve_ref_obj(root_obj, params))
    else {
        return Ok(Vec::new());
    };
    let Some(fields) = params.get("properties").and_then(Value::as_object) else {
        return Ok(Vec::new());
    };

    let required: Vec<&str> = params
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(fields.len());
    for (name, field) in fields {
        let mut field = field.as_object().context("field schema is not an object")?;
        if field.contains_key("$ref") {
            field = resolve_ref_obj(root_obj, field)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
        }
        let Some(kind) = detect_field_kind(field.get("type")) else {
            continue;
        };

        out.push(FieldSpec {
            name: name.clone(),
            title: field
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: field
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: field.get("default").cloned(),
            min: bound(field, "minimum", "exclusiveMinimum"),
            max: bound(field, "maximum", "exclusiveMaximum"),
        });
    }
    Ok(out)
}

fn bound(field: &Object, inclusive: &str, exclusive: &str) -> Option<f64> {
    field
        .get(inclusive)
        .or_else(|| field.get(exclusive))
        .and_then(Value::as_f64)
}

fn discriminant_matches(props: &Object, kind_key: &str) -> bool {
    let Some(tag) = props.get("type").and_then(Value::as_object) else {
        return false;
    };
    if tag.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tag.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Follows a local `$ref` such as `#/$defs/TreeClassifierParams`; objects
/// without a `$ref` are returned unchanged.
fn resolve_ref_obj<'a>(root_obj: &'a Object, obj: &'a Object) -> Option<&'a Object> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = reference.as_str()?.strip_prefix("#/")?;
    let mut current = root_obj;
    for raw in path.split('/') {
        // JSON pointer unescaping
        let segment = raw.replace("~1", "/").replace("~0", "~");
        current = current.get(&segment)?.as_object()?;
    }
    Some(current)
}

fn scalar_kind(name: &str) -> Option<FieldKind> {
    match name {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    match ty? {
        Value::String(name) => scalar_kind(name),
        // Option<T> renders as ["T", "null"]
        Value::Array(names) => names.iter().filter_map(Value::as_str).find_map(scalar_kind),
        _ => None,
    }
}
