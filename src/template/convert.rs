use liquid::model::Value as LiquidValue;
use serde_yaml::Value as YamlValue;

use crate::front_matter::types::scalar_to_string;

/// Convert a YAML metadata value into a template value
pub fn yaml_to_liquid(yaml: &YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                LiquidValue::scalar(n.to_string())
            }
        },
        YamlValue::String(s) => LiquidValue::scalar(s.clone()),
        YamlValue::Sequence(seq) => LiquidValue::Array(seq.iter().map(yaml_to_liquid).collect()),
        YamlValue::Mapping(map) => {
            let mut obj = liquid::Object::new();
            for (k, v) in map {
                // Keys that are not scalars have no sensible template name
                if let Some(key) = scalar_to_string(k) {
                    obj.insert(key.into(), yaml_to_liquid(v));
                }
            }
            LiquidValue::Object(obj)
        },
        YamlValue::Tagged(tagged) => yaml_to_liquid(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquid::model::ArrayView;
    use liquid::ValueView;

    #[test]
    fn test_scalars_and_nesting() {
        let yaml: YamlValue = serde_yaml::from_str("n: 3\nf: 1.5\nb: true\ns: hi\nlist: [1, two]\nmap: {k: v}\nnone: ~").unwrap();
        let value = yaml_to_liquid(&yaml);
        let obj = value.as_object().unwrap();

        assert_eq!(obj.get("n").unwrap().to_kstr().to_string(), "3");
        assert_eq!(obj.get("f").unwrap().to_kstr().to_string(), "1.5");
        assert_eq!(obj.get("b").unwrap().to_kstr().to_string(), "true");
        assert_eq!(obj.get("s").unwrap().to_kstr().to_string(), "hi");
        assert_eq!(obj.get("list").unwrap().as_array().unwrap().size(), 2);
        assert!(obj.get("map").unwrap().as_object().is_some());
        assert!(obj.get("none").unwrap().is_nil());
    }
}
