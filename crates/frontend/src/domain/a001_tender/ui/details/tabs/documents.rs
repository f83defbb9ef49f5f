use contracts::domain::a001_tender::{DocumentSize, TenderDocument};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::number_format::format_file_size;

/// "{size} • {type}", without the parts the server did not send
pub fn document_meta(doc: &TenderDocument) -> String {
    let size = match &doc.size {
        Some(DocumentSize::Bytes(bytes)) => format_file_size(*bytes),
        Some(DocumentSize::Text(text)) => text.clone(),
        None => String::new(),
    };
    [size.as_str(), doc.doc_type.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}

#[component]
pub fn DocumentsTab(documents: Vec<TenderDocument>) -> impl IntoView {
    if documents.is_empty() {
        return view! { <p class="detail-section__empty">"Документы отсутствуют"</p> }.into_any();
    }

    view! {
        <ul class="document-list">
            {documents
                .into_iter()
                .map(|doc| {
                    let meta = document_meta(&doc);
                    view! {
                        <li class="document-list__item">
                            <div class="document-list__info">
                                {icon("file-text")}
                                <div>
                                    <p class="document-list__name">{doc.name}</p>
                                    <p class="document-list__meta">{meta}</p>
                                </div>
                            </div>
                            <a class="button button--secondary" href=doc.url target="_blank" rel="noopener">
                                "Скачать"
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(size: Option<DocumentSize>, doc_type: &str) -> TenderDocument {
        TenderDocument {
            name: "Техническое задание".to_string(),
            size,
            doc_type: doc_type.to_string(),
            url: "/files/tz.pdf".to_string(),
        }
    }

    #[test]
    fn test_document_meta() {
        assert_eq!(
            document_meta(&doc(Some(DocumentSize::Bytes(1_572_864)), "PDF")),
            "1,5 МБ • PDF"
        );
        assert_eq!(
            document_meta(&doc(Some(DocumentSize::Text("2.4 MB".to_string())), "DOCX")),
            "2.4 MB • DOCX"
        );
        assert_eq!(document_meta(&doc(None, "PDF")), "PDF");
        assert_eq!(document_meta(&doc(None, "")), "");
    }
}
