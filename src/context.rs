/// Borrowed view of the parts of a request the checker looks at.
///
/// `None` and `Some("")` are equivalent for every optional field.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    /// Target host without port.
    pub host: Option<&'a str>,
    pub path: &'a str,
    pub sec_fetch_site: Option<&'a str>,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub(crate) fn sec_fetch_site(&self) -> Option<&'a str> {
        present(self.sec_fetch_site)
    }

    pub(crate) fn origin(&self) -> Option<&'a str> {
        present(self.origin)
    }

    pub(crate) fn host(&self) -> Option<&'a str> {
        present(self.host)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
