use serde::{Deserialize, Serialize};
pub use serenity::model::application::component::{ButtonStyle, ComponentType, InputTextStyle};

/// The `style` of a button or a text input. Which one applies follows from
/// the component's type.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ComponentStyle {
    Button(ButtonStyle),
    InputText(InputTextStyle),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
}

/// A message component in its raw wire shape.
///
/// Rows carry children in `components`; buttons, selects and text inputs
/// use the remaining fields as Discord defines them for their type.
///
/// Component types this crate does not know decode as `ComponentType::Unknown`
/// so that a message carrying them still decodes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawComponent")]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ComponentStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

#[derive(Deserialize)]
struct RawComponent {
    #[serde(rename = "type")]
    kind: ComponentType,
    custom_id: Option<String>,
    style: Option<u8>,
    label: Option<String>,
    url: Option<String>,
    disabled: Option<bool>,
    placeholder: Option<String>,
    #[serde(default)]
    options: Vec<SelectOption>,
    min_values: Option<u8>,
    max_values: Option<u8>,
    value: Option<String>,
    required: Option<bool>,
    #[serde(default)]
    components: Vec<Component>,
}

impl TryFrom<RawComponent> for Component {
    type Error = serde_json::Error;

    fn try_from(raw: RawComponent) -> Result<Self, Self::Error> {
        let style = match raw.style {
            Some(style) if raw.kind == ComponentType::InputText => {
                Some(ComponentStyle::InputText(serde_json::from_value(style.into())?))
            }
            Some(style) => Some(ComponentStyle::Button(serde_json::from_value(style.into())?)),
            None => None,
        };

        Ok(Self {
            kind: raw.kind,
            custom_id: raw.custom_id,
            style,
            label: raw.label,
            url: raw.url,
            disabled: raw.disabled,
            placeholder: raw.placeholder,
            options: raw.options,
            min_values: raw.min_values,
            max_values: raw.max_values,
            value: raw.value,
            required: raw.required,
            components: raw.components,
        })
    }
}

impl Component {
    fn empty(kind: ComponentType) -> Self {
        Self {
            kind,
            custom_id: None,
            style: None,
            label: None,
            url: None,
            disabled: None,
            placeholder: None,
            options: vec![],
            min_values: None,
            max_values: None,
            value: None,
            required: None,
            components: vec![],
        }
    }

    pub fn action_row(components: Vec<Component>) -> Self {
        Self { components, ..Self::empty(ComponentType::ActionRow) }
    }

    pub fn button(style: ButtonStyle, custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            style: Some(ComponentStyle::Button(style)),
            custom_id: Some(custom_id.into()),
            label: Some(label.into()),
            ..Self::empty(ComponentType::Button)
        }
    }

    pub fn link_button(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            style: Some(ComponentStyle::Button(ButtonStyle::Link)),
            url: Some(url.into()),
            label: Some(label.into()),
            ..Self::empty(ComponentType::Button)
        }
    }

    pub fn select_menu(custom_id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            custom_id: Some(custom_id.into()),
            options,
            ..Self::empty(ComponentType::SelectMenu)
        }
    }

    pub fn text_input(
        style: InputTextStyle,
        custom_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            style: Some(ComponentStyle::InputText(style)),
            custom_id: Some(custom_id.into()),
            label: Some(label.into()),
            ..Self::empty(ComponentType::InputText)
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);

        self
    }
}
