use std::fs;

use tempfile::tempdir;
use toolbench_core::organize::{
    NO_EXTENSION_BUCKET, organize_directory, plan_moves, preview_tree,
};

#[test]
fn organizes_files_into_extension_buckets() {
    let temp = tempdir().expect("tempdir");
    for name in ["photo.jpg", "notes.txt", "README"] {
        fs::write(temp.path().join(name), b"x").expect("write fixture");
    }

    let report = organize_directory(temp.path()).expect("organize succeeds");
    assert_eq!(report.moved.len(), 3);

    assert!(temp.path().join("jpg/photo.jpg").is_file());
    assert!(temp.path().join("txt/notes.txt").is_file());
    assert!(
        temp.path()
            .join(NO_EXTENSION_BUCKET)
            .join("README")
            .is_file()
    );
    assert!(!temp.path().join("photo.jpg").exists());
}

#[test]
fn directories_are_left_untouched() {
    let temp = tempdir().expect("tempdir");
    fs::create_dir(temp.path().join("keep_me")).expect("mkdir");
    fs::write(temp.path().join("keep_me/inner.txt"), b"x").expect("write fixture");
    fs::write(temp.path().join("song.mp3"), b"x").expect("write fixture");

    let report = organize_directory(temp.path()).expect("organize succeeds");
    assert_eq!(report.moved.len(), 1);

    assert!(temp.path().join("keep_me/inner.txt").is_file());
    assert!(temp.path().join("mp3/song.mp3").is_file());
}

#[test]
fn case_is_folded_into_one_bucket() {
    let temp = tempdir().expect("tempdir");
    fs::write(temp.path().join("a.JPG"), b"x").expect("write fixture");
    fs::write(temp.path().join("b.jpg"), b"x").expect("write fixture");

    organize_directory(temp.path()).expect("organize succeeds");

    assert!(temp.path().join("jpg/a.JPG").is_file());
    assert!(temp.path().join("jpg/b.jpg").is_file());
}

#[test]
fn plan_moves_does_not_touch_the_filesystem() {
    let temp = tempdir().expect("tempdir");
    fs::write(temp.path().join("photo.jpg"), b"x").expect("write fixture");

    let planned = plan_moves(temp.path()).expect("plan succeeds");
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].bucket, "jpg");
    assert!(temp.path().join("photo.jpg").is_file());
    assert!(!temp.path().join("jpg").exists());
}

#[test]
fn organizing_twice_is_a_no_op() {
    let temp = tempdir().expect("tempdir");
    fs::write(temp.path().join("photo.jpg"), b"x").expect("write fixture");

    organize_directory(temp.path()).expect("first run");
    let second = organize_directory(temp.path()).expect("second run");
    assert!(second.moved.is_empty());
    assert!(temp.path().join("jpg/photo.jpg").is_file());
}

#[test]
fn preview_tree_lists_directories_before_files() {
    let temp = tempdir().expect("tempdir");
    fs::create_dir(temp.path().join("zdir")).expect("mkdir");
    fs::write(temp.path().join("zdir/deep.txt"), b"x").expect("write fixture");
    fs::write(temp.path().join("afile.txt"), b"x").expect("write fixture");

    let tree = preview_tree(temp.path(), 3).expect("tree succeeds");
    let names: Vec<&str> = tree.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["zdir", "afile.txt"]);
    assert!(tree.children[0].is_dir);
    assert_eq!(tree.children[0].children[0].name, "deep.txt");
}

#[test]
fn preview_tree_respects_depth_cap() {
    let temp = tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join("a/b/c")).expect("mkdir");

    let tree = preview_tree(temp.path(), 1).expect("tree succeeds");
    assert_eq!(tree.children[0].name, "a");
    assert!(tree.children[0].children.is_empty());
}
