pub(crate) const DEFAULT_MARKER_SEGMENT: &str = "alicenode_inhabitat";
pub(crate) const DEFAULT_LIST_PATH: &str = "../alicenode/client/worktreeList.txt";
