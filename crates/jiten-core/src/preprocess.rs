pub trait Preprocessor {
    // Default table-cell cleanup
    fn process(&self, text: &str) -> String {
        let text = text.replace(['\n', '\r'], "").replace(',', "、");

        // All whitespace goes, including the ideographic space
        let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        text.trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
