//! Fixture scenarios for reading, deriving and re-emitting helper arguments.

use std::io::{BufRead, BufReader, Cursor};

use credential_args::{
    ArgumentsError, FormatError, InvalidUriError, OperationArguments, ParserConfig,
    SeparatorPolicy,
};

/// Mirrors what a calling tool writes for a `get`/`store`/`erase` request.
#[derive(Default)]
struct InputArg<'a> {
    protocol: &'a str,
    host: &'a str,
    path: Option<&'a str>,
    username: Option<&'a str>,
    password: Option<&'a str>,
}

impl InputArg<'_> {
    fn to_wire(&self) -> String {
        let mut out = format!("protocol={}\nhost={}\n", self.protocol, self.host);
        for (key, value) in [
            ("path", self.path),
            ("username", self.username),
            ("password", self.password),
        ] {
            if let Some(value) = value {
                out.push_str(&format!("{key}={value}\n"));
            }
        }
        out.push('\n');
        out
    }
}

fn read_lines(input: &str) -> Vec<String> {
    BufReader::new(input.as_bytes())
        .lines()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn from_stream(input: &str) -> OperationArguments {
    OperationArguments::from_reader(Cursor::new(input.as_bytes().to_vec())).unwrap()
}

fn assert_fields_match(input: &InputArg<'_>) -> OperationArguments {
    let args = from_stream(&input.to_wire());

    assert_eq!(args.protocol(), Some(input.protocol));
    assert_eq!(args.host(), Some(input.host));
    assert_eq!(args.path(), input.path);
    assert_eq!(args.username(), input.username);
    assert_eq!(args.password(), input.password);
    assert_eq!(read_lines(&args.to_string()), read_lines(&input.to_wire()));
    args
}

mod wire_roundtrip {
    use super::*;

    #[test]
    fn typical() {
        let input = "protocol=https\n\
                     host=example.visualstudio.com\n\
                     path=path\n\
                     username=userName\n\
                     password=incorrect\n";
        let args = from_stream(input);

        assert_eq!(args.protocol(), Some("https"));
        assert_eq!(args.host(), Some("example.visualstudio.com"));
        assert_eq!(args.path(), Some("path"));
        assert_eq!(args.username(), Some("userName"));
        assert_eq!(args.password(), Some("incorrect"));
        assert_eq!(
            args.target_uri().unwrap().host_url(),
            "https://example.visualstudio.com/"
        );
        assert_eq!(
            args.target_uri().unwrap().to_string(),
            "https://example.visualstudio.com/path"
        );

        let mut expected = read_lines(input);
        expected.push(String::new());
        assert_eq!(read_lines(&args.to_string()), expected);
    }

    #[test]
    fn special_characters() {
        let input = "protocol=https\n\
                     host=example.visualstudio.com\n\
                     path=path\n\
                     username=userNamể\n\
                     password=ḭncorrect\n\n";
        let args = from_stream(input);

        assert_eq!(args.username(), Some("userNamể"));
        assert_eq!(args.password(), Some("ḭncorrect"));
        assert_eq!(
            args.target_uri().unwrap().host_url(),
            "https://example.visualstudio.com/"
        );
        assert_eq!(args.to_string().as_bytes(), input.as_bytes());
    }

    #[test]
    fn combining_sequences_are_not_normalized() {
        // "e" followed by U+0309 COMBINING HOOK ABOVE, not the precomposed form
        let input = "username=userName\u{0065}\u{0309}\n\n";
        let args = from_stream(input);
        assert_eq!(args.username(), Some("userName\u{0065}\u{0309}"));
        assert_eq!(args.to_string(), input);
    }

    #[test]
    fn windows_line_endings_are_normalized_on_output() {
        let args = from_stream("protocol=https\r\nhost=github.com\r\n\r\n");
        assert_eq!(args.to_string(), "protocol=https\nhost=github.com\n\n");
    }

    #[test]
    fn trailing_data_after_terminator_is_ignored() {
        let args = from_stream("protocol=https\nhost=github.com\n\nprotocol=http\n\n");
        assert_eq!(args.protocol(), Some("https"));
        assert_eq!(args.len(), 2);
    }
}

mod target_uri {
    use super::*;

    #[test]
    fn github_simple() {
        let args = assert_fields_match(&InputArg {
            protocol: "https",
            host: "github.com",
            ..InputArg::default()
        });
        assert_eq!(args.target_uri().unwrap().to_string(), "https://github.com/");
    }

    #[test]
    fn vsts_simple() {
        let args = assert_fields_match(&InputArg {
            protocol: "https",
            host: "team.visualstudio.com",
            ..InputArg::default()
        });
        assert_eq!(
            args.target_uri().unwrap().to_string(),
            "https://team.visualstudio.com/"
        );
    }

    #[test]
    fn github_complex() {
        let args = assert_fields_match(&InputArg {
            protocol: "https",
            host: "github.com",
            path: Some("Microsoft/Git-Credential-Manager-for-Windows.git"),
            ..InputArg::default()
        });
        let uri = args.target_uri().unwrap();
        assert_eq!(
            uri.to_string(),
            "https://github.com/Microsoft/Git-Credential-Manager-for-Windows.git"
        );
        assert_eq!(uri.host_url(), "https://github.com/");
    }

    #[test]
    fn with_port_number() {
        let args = assert_fields_match(&InputArg {
            protocol: "https",
            host: "onpremis:8080",
            ..InputArg::default()
        });
        let uri = args.target_uri().unwrap();
        assert_eq!(uri.host(), "onpremis");
        assert_eq!(uri.port(), Some(8080));
        assert_eq!(uri.to_string(), "https://onpremis:8080/");
    }

    #[test]
    fn complex_and_messy() {
        let args = assert_fields_match(&InputArg {
            protocol: "https",
            host: "foo.bar.com:8181?git-credential=manager",
            path: Some("this-is/a/path%20with%20spaces"),
            ..InputArg::default()
        });
        let uri = args.target_uri().unwrap();
        assert_eq!(uri.host(), "foo.bar.com:8181?git-credential=manager");
        assert!(uri.port().is_none());
        assert_eq!(uri.path(), Some("this-is/a/path%20with%20spaces"));
        assert!(uri.to_string().ends_with("/this-is/a/path%20with%20spaces"));
    }

    #[test]
    fn with_credentials() {
        let args = assert_fields_match(&InputArg {
            protocol: "http",
            host: "insecure.com",
            username: Some("naive"),
            password: Some("password"),
            ..InputArg::default()
        });
        assert_eq!(args.username(), Some("naive"));
        assert_eq!(args.password(), Some("password"));
        assert_eq!(args.target_uri().unwrap().to_string(), "http://insecure.com/");
    }

    #[test]
    fn missing_host_is_reported_on_access() {
        let args = from_stream("protocol=https\n\n");
        assert_eq!(args.target_uri(), Err(InvalidUriError::MissingHost));
    }
}

mod credential_exchange {
    use super::*;

    #[test]
    fn get_response_fills_in_credentials() {
        let mut args = from_stream("protocol=https\nhost=github.com\n\n");
        args.set_credentials("octocat", "ghp_token").unwrap();

        let mut out = Vec::new();
        args.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "protocol=https\nhost=github.com\nusername=octocat\npassword=ghp_token\n\n"
        );
    }

    #[test]
    fn erase_drops_credentials() {
        let mut args = from_stream(
            "protocol=http\nhost=insecure.com\nusername=naive\npassword=password\n\n",
        );
        args.clear_credentials();
        assert!(args.username().is_none());
        assert!(args.password().is_none());
        assert_eq!(args.to_string(), "protocol=http\nhost=insecure.com\n\n");
    }
}

mod malformed_input {
    use super::*;

    #[test]
    fn line_without_separator_fails() {
        let result = OperationArguments::parse("protocol=https\nhost\n\n");
        match result {
            Err(ArgumentsError::Format(FormatError::MissingSeparator { line_number, line })) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "host");
            }
            other => panic!("expected missing separator, got {other:?}"),
        }
    }

    #[test]
    fn line_without_separator_is_not_echoed() {
        let err = OperationArguments::parse("protocol=https\nhunter2\n\n").unwrap_err();
        assert!(!format!("{err:?}").contains("hunter2"));
        assert!(!err.to_string().contains("hunter2"));
    }

    #[test]
    fn doubled_carriage_return_fails() {
        let result = OperationArguments::parse(
            "protocol=https\nhost=a.com\npassword=secret\r\r\n\n",
        );
        assert!(matches!(
            result,
            Err(ArgumentsError::Format(FormatError::ForbiddenChar {
                line_number: 3,
                char: '\r',
            }))
        ));
    }

    #[test]
    fn line_without_separator_can_be_skipped() {
        let config = ParserConfig::new().with_separator_policy(SeparatorPolicy::Skip);
        let args = OperationArguments::from_reader_with(
            "protocol=https\nhost\nhost=github.com\n\n".as_bytes(),
            &config,
        )
        .unwrap();
        assert_eq!(args.to_string(), "protocol=https\nhost=github.com\n\n");
    }

    #[test]
    fn stream_errors_are_surfaced() {
        struct Failing;

        impl std::io::Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("pipe closed"))
            }
        }

        let result = OperationArguments::from_reader(Failing);
        assert!(matches!(result, Err(ArgumentsError::Read(_))));
    }
}
