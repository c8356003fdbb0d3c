//! Remote operations and their addresses on each transport.

/// Address of one remote operation: an HTTP method and path plus the
/// equivalent AMQP routing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// HTTP method, `GET` or `POST` (case-insensitive).
    pub http_method: &'static str,
    /// Path relative to the base URI.
    pub http_path: &'static str,
    /// Routing key on the queue transport.
    pub routing_key: &'static str,
}

impl Operation {
    /// A `GET` operation.
    pub const fn get(http_path: &'static str, routing_key: &'static str) -> Self {
        Self {
            http_method: "GET",
            http_path,
            routing_key,
        }
    }

    /// A `POST` operation.
    pub const fn post(http_path: &'static str, routing_key: &'static str) -> Self {
        Self {
            http_method: "POST",
            http_path,
            routing_key,
        }
    }
}

/// Google search, also used for news with `tbm=nws`.
pub const GOOGLE_SEARCH: Operation = Operation::get("/google/search", "frealtime.api.google.search");

/// Yandex Catalog entry of a domain.
pub const YANDEX_CATALOG: Operation =
    Operation::get("/yandex/catalog", "frealtime.api.yandex.catalog");
/// Yandex search through the HTML frontend.
pub const YANDEX_SEARCH: Operation = Operation::get("/yandex/search", "frealtime.api.yandex.search");
/// Yandex search through Yandex XML.
pub const YANDEX_XML_SEARCH: Operation =
    Operation::get("/yandex_xml/search", "frealtime.api.yandex_xml.search");
/// Yandex thematic citation index.
pub const YANDEX_TIC: Operation = Operation::get("/yandex/tic", "frealtime.api.yandex.tic");
/// Last known Yandex TIC.
pub const YANDEX_LAST_TIC: Operation =
    Operation::get("/yandex/last_tic", "frealtime.api.yandex.last_tic");
/// Yandex site quality index.
pub const YANDEX_SQI: Operation = Operation::get("/yandex/sqi", "frealtime.api.yandex.sqi");
/// Yandex site quality index for a JSON-encoded list of domains.
pub const YANDEX_SQI_BATCH: Operation =
    Operation::get("/yandex/sqi_batch", "frealtime.api.yandex.sqi_batch");
/// Yandex.Metrica counter of a domain.
pub const YANDEX_CYCOUNTER: Operation =
    Operation::get("/yandex/cycounter", "frealtime.api.yandex.cycounter");
/// Yandex achievements of a domain.
pub const YANDEX_ACHIEVEMENTS: Operation =
    Operation::get("/yandex/achievements", "frealtime.api.yandex.achievements");

/// Lemmas of a text.
pub const CA_LEMMAS: Operation = Operation::get("/ca/lemmas", "frealtime.api.ca.lemmas");
/// Lemmas of a text, per line.
pub const CA_LEMMAS_PER_LINE: Operation =
    Operation::get("/ca/lemmas_per_line", "frealtime.api.ca.lemmas_per_line");
/// Distance between two texts.
pub const CA_DISTANCE_MEASURE: Operation =
    Operation::get("/ca/distance_measure", "frealtime.api.ca.distance_measure");
/// TF-IDF of a page.
pub const CA_TFIDF_BY_URL: Operation =
    Operation::get("/ca/tfidf_by_url", "frealtime.api.ca.tfidf_by_url");
/// TF-IDF of a text.
pub const CA_TFIDF_BY_TEXT: Operation =
    Operation::get("/ca/tfidf_by_text", "frealtime.api.ca.tfidf_by_text");
/// Page data rendered by a headless browser.
pub const CA_BROWSER_DATA: Operation =
    Operation::get("/ca/browser_data", "frealtime.api.ca.browser_data");
/// Browser-rendered page data with lemmas.
pub const CA_BROWSER_DATA_WITH_LEMMAS: Operation = Operation::get(
    "/ca/browser_data_with_lemmas",
    "frealtime.api.ca.browser_data_with_lemmas",
);

/// SimilarWeb traffic data.
pub const SW_PARSE_WITH_SALT: Operation =
    Operation::get("/sw/parse_sw_with_salt", "frealtime.api.sw.parse_sw_with_salt");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_keys_mirror_paths() {
        for op in [
            GOOGLE_SEARCH,
            YANDEX_CATALOG,
            YANDEX_SEARCH,
            YANDEX_XML_SEARCH,
            YANDEX_TIC,
            YANDEX_LAST_TIC,
            YANDEX_SQI,
            YANDEX_SQI_BATCH,
            YANDEX_CYCOUNTER,
            YANDEX_ACHIEVEMENTS,
            CA_LEMMAS,
            CA_LEMMAS_PER_LINE,
            CA_DISTANCE_MEASURE,
            CA_TFIDF_BY_URL,
            CA_TFIDF_BY_TEXT,
            CA_BROWSER_DATA,
            CA_BROWSER_DATA_WITH_LEMMAS,
            SW_PARSE_WITH_SALT,
        ] {
            let expected = format!("frealtime.api{}", op.http_path.replace('/', "."));
            assert_eq!(op.routing_key, expected);
            assert_eq!(op.http_method, "GET");
        }
    }
}
