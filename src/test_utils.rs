use crate::render::Renderer;

/// Renderer recording every call, output wraps the input in `<rendered>` tags
#[derive(Debug, Default)]
pub(crate) struct FakeRenderer {
    pub(crate) calls: Vec<String>,
    pub(crate) resets: usize,
}

impl Renderer for FakeRenderer {
    fn render(&mut self, text: &str) -> String {
        self.calls.push(text.to_string());
        format!("<rendered>{text}</rendered>")
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

#[must_use]
pub(crate) fn is_error<E>(error: impl std::error::Error) -> bool
where
    E: std::error::Error + 'static,
{
    let mut source = error.source();
    while let Some(err) = source {
        if err.downcast_ref::<E>().is_some() {
            return true;
        }

        source = err.source();
    }

    false
}
