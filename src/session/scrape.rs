//! HTML extraction for the portal's login flow
//!
//! Two pure functions over the portal's markup: hidden-token extraction from
//! the login form and error-text extraction from the response page. Both are
//! total over arbitrary input; absent elements yield empty strings, never
//! panics, so a portal markup change degrades into a classifiable rejection
//! instead of a crash.
//!
//! The selectors mirror the portal's current error-rendering markup and are
//! inherently fragile; keeping them here, behind these two functions, keeps
//! the brittleness out of the transport and classification code.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static REQUISICAO_INPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"input[name="requisicao"]"#).expect("static selector"));

static TOKEN_INPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"input[name="_token"]"#).expect("static selector"));

static ERROR_FONT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("br + table font").expect("static selector"));

/// Hidden form tokens scraped from the login page
///
/// Valid only for the single follow-up request that echoes them back. Empty
/// strings when the inputs are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginPageTokens {
    /// Value of the `requisicao` hidden input
    pub request_id: String,
    /// Value of the `_token` hidden input
    pub csrf_token: String,
}

/// Extract the request and CSRF tokens from the login page
pub fn extract_login_tokens(html: &str) -> LoginPageTokens {
    let document = Html::parse_document(html);

    let value_of = |selector: &Selector| {
        document
            .select(selector)
            .next()
            .and_then(|input| input.value().attr("value"))
            .unwrap_or_default()
            .to_string()
    };

    LoginPageTokens {
        request_id: value_of(&REQUISICAO_INPUT),
        csrf_token: value_of(&TOKEN_INPUT),
    }
}

/// Extract the portal's rendered error message, if any
///
/// Returns the trimmed text of the first `font` element inside the first
/// table that immediately follows a line break, or an empty string when the
/// page has no such block.
pub fn extract_error_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .select(&ERROR_FONT)
        .next()
        .map(|font| font.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOGIN_PAGE: &str = r#"
        <html><body>
          <form method="get" action="/requisicaoaluno/">
            <input type="hidden" name="requisicao" value="LoginAlunoOnline">
            <input type="hidden" name="_token" value="a1b2c3d4">
            <input type="text" name="matricula">
            <input type="password" name="senha">
          </form>
        </body></html>
    "#;

    #[test]
    fn test_extract_tokens_from_login_form() {
        let tokens = extract_login_tokens(LOGIN_PAGE);
        assert_eq!(tokens.request_id, "LoginAlunoOnline");
        assert_eq!(tokens.csrf_token, "a1b2c3d4");
    }

    #[test]
    fn test_extract_tokens_empty_input() {
        assert_eq!(extract_login_tokens(""), LoginPageTokens::default());
    }

    #[test]
    fn test_extract_tokens_malformed_markup() {
        let tokens = extract_login_tokens("<<<form><input name=></zzz>");
        assert_eq!(tokens, LoginPageTokens::default());
    }

    #[test]
    fn test_extract_tokens_missing_inputs() {
        let tokens = extract_login_tokens("<html><body><p>sem formulário</p></body></html>");
        assert_eq!(tokens.request_id, "");
        assert_eq!(tokens.csrf_token, "");
    }

    #[test]
    fn test_extract_tokens_input_without_value() {
        let tokens = extract_login_tokens(r#"<input name="requisicao"><input name="_token">"#);
        assert_eq!(tokens, LoginPageTokens::default());
    }

    #[test]
    fn test_extract_error_text() {
        let html = r#"
            <br>
            <table><tr><td><font color="red">Credenciais Inválidas</font></td></tr></table>
        "#;
        assert_eq!(extract_error_text(html), "Credenciais Inválidas");
    }

    #[test]
    fn test_extract_error_text_trims_whitespace() {
        let html = "<br><table><tr><td><font>  Sistema em manutenção \n </font></td></tr></table>";
        assert_eq!(extract_error_text(html), "Sistema em manutenção");
    }

    #[test]
    fn test_extract_error_text_first_match_only() {
        let html = r#"
            <br><table><tr><td><font>primeira mensagem</font></td></tr></table>
            <br><table><tr><td><font>segunda mensagem</font></td></tr></table>
        "#;
        assert_eq!(extract_error_text(html), "primeira mensagem");
    }

    #[test]
    fn test_extract_error_text_nested_markup() {
        let html = "<br><table><tr><td><font><b>Esta matrícula</b> não existe</font></td></tr></table>";
        assert_eq!(extract_error_text(html), "Esta matrícula não existe");
    }

    #[test]
    fn test_extract_error_text_absent() {
        assert_eq!(extract_error_text("<html><body>bem-vindo</body></html>"), "");
        assert_eq!(extract_error_text(""), "");
    }

    #[test]
    fn test_extract_error_text_table_without_leading_br() {
        let html = "<table><tr><td><font>mensagem</font></td></tr></table>";
        assert_eq!(extract_error_text(html), "");
    }
}
