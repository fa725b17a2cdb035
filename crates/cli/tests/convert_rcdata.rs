use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rcsum_corpus::hash_hex;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const URL: &str = "http://www.cnn.com/2015/01/01/us/cat-story/";

#[allow(deprecated)]
fn convert_rcdata() -> Command {
    Command::cargo_bin("convert_rcdata").expect("binary")
}

fn setup_corpus(root: &Path) {
    let stories = root.join("stories");
    let questions = root.join("questions").join("training");
    fs::create_dir_all(&stories).unwrap();
    fs::create_dir_all(&questions).unwrap();

    fs::write(
        stories.join(format!("{}.story", hash_hex(URL))),
        "The cat sat. The dog ran.\n\n@highlight\n\ncat sat\n\n@highlight\n\ndog ran home",
    )
    .unwrap();
    for (name, answer) in [("cat.question", "@entity0"), ("dog.question", "@entity1")] {
        fs::write(
            questions.join(name),
            format!(
                "{URL}\n\n@entity0 sat . @entity1 ran .\n\n@placeholder moved\n\n{answer}\n\n@entity0:Cat\n@entity1:Dog\n"
            ),
        )
        .unwrap();
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("{}: {err}", path.display()))
}

#[test]
fn writes_dataset_layout() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    setup_corpus(root);
    let out = root.join("out");

    convert_rcdata()
        .arg(root.join("stories"))
        .arg(root.join("questions"))
        .arg(&out)
        .args([
            "--save_first_query_sentences",
            "--save_document_lengths",
            "--save_synthetic_references",
            "--quiet",
        ])
        .assert()
        .success();

    // A single article always lands in validation.
    let validation = out.join("validation");
    assert_eq!(
        read(&validation.join("documents/1.txt")),
        "the cat sat . the dog ran ."
    );
    assert_eq!(read(&validation.join("entities/1.txt")), "cat\ndog");

    let mut queries: Vec<String> = ["1.1.txt", "1.2.txt"]
        .iter()
        .map(|name| read(&validation.join("queries").join(name)))
        .collect();
    queries.sort();
    assert_eq!(queries, vec!["cat", "dog"]);

    for query_id in 1..=2 {
        let query = read(&validation.join(format!("queries/1.{query_id}.txt")));
        let reference = read(&validation.join(format!("references/A.1.{query_id}.txt")));
        let first_sentence =
            read(&validation.join(format!("first_query_sentences/1.{query_id}.txt")));
        let synthetic =
            read(&validation.join(format!("synthetic_references/A.1.{query_id}.txt")));
        match query.as_str() {
            "cat" => {
                assert_eq!(reference, "cat sat");
                assert_eq!(first_sentence, "the cat sat");
                assert_eq!(synthetic, "cat sat");
            }
            "dog" => {
                assert_eq!(reference, "dog ran home");
                assert_eq!(first_sentence, "the dog ran");
                assert_eq!(synthetic, "dog ran");
            }
            other => panic!("unexpected query {other}"),
        }
    }

    assert_eq!(
        read(&validation.join("input_lengths.txt")),
        "A.1.1.txt 8\nA.1.2.txt 8\n"
    );

    for split in ["test", "training"] {
        for sub in ["queries", "documents", "references", "entities"] {
            let dir = out.join(split).join(sub);
            assert!(dir.is_dir(), "{} missing", dir.display());
            assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        }
    }
}

#[test]
fn output_is_reproducible() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    setup_corpus(root);

    for out in ["first", "second"] {
        convert_rcdata()
            .arg(root.join("stories"))
            .arg(root.join("questions"))
            .arg(root.join(out))
            .arg("-q")
            .assert()
            .success();
    }

    for name in ["queries/1.1.txt", "queries/1.2.txt", "references/A.1.1.txt"] {
        assert_eq!(
            read(&root.join("first/validation").join(name)),
            read(&root.join("second/validation").join(name))
        );
    }
}

#[test]
fn rejects_out_of_range_fraction() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    setup_corpus(root);

    convert_rcdata()
        .arg(root.join("stories"))
        .arg(root.join("questions"))
        .arg(root.join("out"))
        .args(["--validation_test_fraction", "0.6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid conversion options"));
    assert!(!root.join("out").exists());
}

#[test]
fn missing_story_fails() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    setup_corpus(root);
    fs::remove_file(root.join("stories").join(format!("{}.story", hash_hex(URL)))).unwrap();

    convert_rcdata()
        .arg(root.join("stories"))
        .arg(root.join("questions"))
        .arg(root.join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(URL));
}
