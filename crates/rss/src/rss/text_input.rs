// ABOUTME: RSS <textInput> entity: a text box displayed with the channel.
// ABOUTME: Title, description, form field name, and the CGI link that processes input.

use std::cmp::Ordering;

use super::{write_optional, LoadContext, RssEntity};
use crate::error::{Result, SyndicationError};
use crate::extensions::{ExtensionAdapter, SyndicationExtension};
use crate::text::{compare_opt_ignore_case, normalize};
use crate::uri::{compare_opt, Uri};
use crate::xml::{XmlNode, XmlWriter};

#[derive(Debug, Clone, Default)]
pub struct RssTextInput {
    title: Option<String>,
    description: Option<String>,
    name: Option<String>,
    link: Option<Uri>,
    pub(super) extensions: Vec<SyndicationExtension>,
}

impl RssTextInput {
    pub fn new(title: &str, description: &str, name: &str, link: Uri) -> Result<Self> {
        let mut input = Self {
            link: Some(link),
            ..Self::default()
        };
        input.set_title(title)?;
        input.set_description(description)?;
        input.set_name(name)?;
        Ok(input)
    }

    /// Label of the Submit button.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = Some(normalize(title).ok_or(SyndicationError::empty("title"))?);
        Ok(())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) -> Result<()> {
        self.description = Some(normalize(description).ok_or(SyndicationError::empty("description"))?);
        Ok(())
    }

    /// Name of the text object in the input form.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = Some(normalize(name).ok_or(SyndicationError::empty("name"))?);
        Ok(())
    }

    pub fn link(&self) -> Option<&Uri> {
        self.link.as_ref()
    }

    pub fn set_link(&mut self, link: Uri) {
        self.link = Some(link);
    }
}

impl RssEntity for RssTextInput {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        for (name, slot) in [
            ("title", &mut self.title),
            ("description", &mut self.description),
            ("name", &mut self.name),
        ] {
            if let Some(value) = node.child_value(name) {
                *slot = Some(value);
                loaded = true;
            }
        }
        if let Some(raw) = node.child_value("link") {
            match Uri::parse(&raw) {
                Ok(link) => {
                    self.link = Some(link);
                    loaded = true;
                }
                Err(e) => tracing::warn!(error = %e, "skipping textInput link"),
            }
        }

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        loaded
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("textInput")?;
        write_optional(writer, "title", self.title.as_deref())?;
        write_optional(writer, "description", self.description.as_deref())?;
        write_optional(writer, "name", self.name.as_deref())?;
        write_optional(writer, "link", self.link.as_ref().map(Uri::as_str))?;
        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssTextInput {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_opt_ignore_case(self.description.as_deref(), other.description.as_deref())
            .then_with(|| compare_opt(self.link.as_ref(), other.link.as_ref()))
            .then_with(|| compare_opt_ignore_case(self.name.as_deref(), other.name.as_deref()))
            .then_with(|| compare_opt_ignore_case(self.title.as_deref(), other.title.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let mut input = RssTextInput::default();
        assert!(input.set_name("").is_err());
        assert!(input.set_description(" ").is_err());
        assert!(input.set_title("Search").is_ok());
    }

    #[test]
    fn test_round_trip() {
        let input = RssTextInput::new(
            "Search",
            "Search this site",
            "q",
            Uri::parse("http://example.com/search.cgi").unwrap(),
        )
        .unwrap();
        let xml = input.to_xml_string().unwrap();
        assert!(xml.starts_with("<textInput>"));

        let mut loaded = RssTextInput::default();
        assert!(loaded.load(&XmlNode::parse_str(&xml).unwrap()));
        assert_eq!(loaded, input);
        assert_eq!(loaded.name(), Some("q"));
    }
}
