use axum::{
    extract::Request,
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;

pub use multer::Error as MultipartError;

/// One fully buffered part of a `multipart/form-data` body.
#[derive(Debug, Clone)]
pub struct FormPart {
    pub name: Option<String>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl FormPart {
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// The declared filename, treating an empty one as absent.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref().filter(|f| !f.is_empty())
    }
}

/// Sequential reader over a multipart request body.
///
/// Parts are read one at a time, so a caller can stop at the first part it
/// rejects without consuming the rest of the body.
pub struct MultipartForm {
    inner: multer::Multipart<'static>,
}

impl MultipartForm {
    /// Open `req` as multipart. Fails when the content type is not
    /// `multipart/form-data` or carries no boundary.
    pub fn from_request(req: Request) -> Result<Self, MultipartError> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let boundary = multer::parse_boundary(content_type)?;
        let stream = req.into_body().into_data_stream();

        Ok(Self {
            inner: multer::Multipart::new(stream, boundary),
        })
    }

    /// Read the next part in full, or `None` once the body is exhausted.
    pub async fn next_part(&mut self) -> Result<Option<FormPart>, MultipartError> {
        let Some(field) = self.inner.next_field().await? else {
            return Ok(None);
        };

        let name = field.name().map(str::to_string);
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(|m| m.to_string());
        let data = field.bytes().await?;

        Ok(Some(FormPart {
            name,
            filename,
            content_type,
            data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    const BOUNDARY: &str = "X-TEST-BOUNDARY";

    fn request(content_type: &str, body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_body() -> String {
        format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"metadata\"\r\n\r\n\
             {{\"S3Root\":\"root\"}}\r\n\
             --{b}\r\n\
             Content-Disposition: form-data; name=\"upload\"; filename=\"a/b/c.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             hi\r\n\
             --{b}--\r\n",
            b = BOUNDARY
        )
    }

    #[tokio::test]
    async fn reads_parts_in_order() {
        let req = request(
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            &form_body(),
        );
        let mut form = MultipartForm::from_request(req).unwrap();

        let meta = form.next_part().await.unwrap().unwrap();
        assert!(meta.is_named("metadata"));
        assert_eq!(meta.filename(), None);
        assert_eq!(&meta.data[..], br#"{"S3Root":"root"}"#);

        let file = form.next_part().await.unwrap().unwrap();
        assert!(file.is_named("upload"));
        assert_eq!(file.filename(), Some("a/b/c.txt"));
        assert_eq!(file.content_type.as_deref(), Some("text/plain"));
        assert_eq!(&file.data[..], b"hi");

        assert!(form.next_part().await.unwrap().is_none());
    }

    #[test]
    fn non_multipart_content_type_is_rejected() {
        assert!(MultipartForm::from_request(request("text/plain", "hello")).is_err());
    }

    #[test]
    fn missing_boundary_is_rejected() {
        assert!(MultipartForm::from_request(request("multipart/form-data", "")).is_err());
    }

    #[test]
    fn empty_filename_counts_as_absent() {
        let part = FormPart {
            name: Some("upload".into()),
            filename: Some(String::new()),
            content_type: None,
            data: Bytes::new(),
        };
        assert_eq!(part.filename(), None);
    }
}
